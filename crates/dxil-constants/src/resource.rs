use crate::macros::dxil_enum;

dxil_enum! {
    /// Binding class of a resource, also the first operand of `CreateHandle`.
    pub enum ResourceClass: u32 {
        Srv = 0,
        Uav = 1,
        CBuffer = 2,
        Sampler = 3,
        Invalid = 4,
    }
}

dxil_enum! {
    /// Shape of a bound resource. `NumEntries` is the exclusive upper bound.
    pub enum ResourceKind: u32 {
        Invalid = 0,
        Texture1D = 1,
        Texture2D = 2,
        Texture2DMS = 3,
        Texture3D = 4,
        TextureCube = 5,
        Texture1DArray = 6,
        Texture2DArray = 7,
        Texture2DMSArray = 8,
        TextureCubeArray = 9,
        TypedBuffer = 10,
        RawBuffer = 11,
        StructuredBuffer = 12,
        CBuffer = 13,
        Sampler = 14,
        TBuffer = 15,
        RTAccelerationStructure = 16,
        NumEntries = 17,
    }
}

dxil_enum! {
    pub enum SamplerKind: u32 {
        Default = 0,
        Comparison = 1,
        Mono = 2,
        Invalid = 3,
    }
}

impl ResourceKind {
    pub const fn is_texture(self) -> bool {
        matches!(
            self,
            Self::Texture1D
                | Self::Texture2D
                | Self::Texture2DMS
                | Self::Texture3D
                | Self::TextureCube
                | Self::Texture1DArray
                | Self::Texture2DArray
                | Self::Texture2DMSArray
                | Self::TextureCubeArray
        )
    }

    pub const fn is_buffer(self) -> bool {
        matches!(
            self,
            Self::TypedBuffer | Self::RawBuffer | Self::StructuredBuffer
        )
    }
}
