use crate::macros::dxil_enum;

dxil_enum! {
    /// Pipeline stage or library/ray-tracing entry kind of a shader.
    pub enum ShaderKind: u32 {
        Pixel = 0,
        Vertex = 1,
        Geometry = 2,
        Hull = 3,
        Domain = 4,
        Compute = 5,
        Library = 6,
        RayGeneration = 7,
        Intersection = 8,
        AnyHit = 9,
        ClosestHit = 10,
        Miss = 11,
        Callable = 12,
        Invalid = 13,
    }
}

dxil_enum! {
    pub enum SignatureKind: u32 {
        Invalid = 0,
        Input = 1,
        Output = 2,
        PatchConstant = 3,
    }
}

dxil_enum! {
    /// Arbitrary semantic or a specific system value.
    pub enum SemanticKind: u32 {
        Arbitrary = 0,
        VertexID = 1,
        InstanceID = 2,
        Position = 3,
        RenderTargetArrayIndex = 4,
        ViewPortArrayIndex = 5,
        ClipDistance = 6,
        CullDistance = 7,
        OutputControlPointID = 8,
        DomainLocation = 9,
        PrimitiveID = 10,
        GSInstanceID = 11,
        SampleIndex = 12,
        IsFrontFace = 13,
        Coverage = 14,
        InnerCoverage = 15,
        Target = 16,
        Depth = 17,
        DepthLessEqual = 18,
        DepthGreaterEqual = 19,
        StencilRef = 20,
        DispatchThreadID = 21,
        GroupID = 22,
        GroupIndex = 23,
        GroupThreadID = 24,
        TessFactor = 25,
        InsideTessFactor = 26,
        ViewID = 27,
        Barycentrics = 28,
        Invalid = 29,
    }
}

dxil_enum! {
    /// Signature point: a stage plus the direction and frequency of the
    /// elements it carries.
    ///
    /// This is finer grained than a shader stage: the hull shader alone has
    /// separate points for control-point inputs, control-point outputs and
    /// patch-constant data.
    pub enum SigPointKind: u32 {
        /// Vertex shader input fed by the input assembler.
        VSIn = 0,
        /// Vertex shader output; may feed the rasterizer.
        VSOut = 1,
        /// Patch-constant function inputs that are not per control point.
        PCIn = 2,
        /// Hull shader inputs that are not per control point.
        HSIn = 3,
        /// Hull shader input control points.
        HSCPIn = 4,
        /// Hull shader output control point.
        HSCPOut = 5,
        /// Patch-constant data handed to the domain shader.
        PCOut = 6,
        /// Domain shader patch-constant data plus system values.
        DSIn = 7,
        /// Domain shader input control points.
        DSCPIn = 8,
        /// Domain shader output vertex.
        DSOut = 9,
        /// Geometry shader per-vertex input.
        GSVIn = 10,
        /// Geometry shader system-value inputs that are not per vertex.
        GSIn = 11,
        /// Geometry shader output vertex.
        GSOut = 12,
        PSIn = 13,
        PSOut = 14,
        CSIn = 15,
        Invalid = 16,
    }
}

dxil_enum! {
    /// How a semantic is treated at a particular signature point.
    pub enum SemanticInterpretationKind: u32 {
        /// Not available at this point.
        Na = 0,
        /// Ordinary system value.
        Sv = 1,
        /// System-generated value; sorted after other elements.
        Sgv = 2,
        /// Treated as an arbitrary semantic.
        Arb = 3,
        /// Accessed through an intrinsic, never part of the signature.
        NotInSig = 4,
        /// In the signature but excluded from packing.
        NotPacked = 5,
        /// `SV_Target` handling.
        Target = 6,
        /// Tessellation-factor handling.
        TessFactor = 7,
        /// A shadow element is added to the signature for compatibility.
        Shadow = 8,
        Invalid = 9,
    }
}

dxil_enum! {
    /// Which packing rules apply to a signature.
    pub enum PackingKind: u32 {
        /// No packing is performed.
        None = 0,
        /// Vertex shader input from the input assembler.
        InputAssembler = 1,
        /// Vertex data that may feed the rasterizer.
        Vertex = 2,
        PatchConstant = 3,
        /// Pixel shader render-target output.
        Target = 4,
        Invalid = 5,
    }
}

dxil_enum! {
    /// Element placement policy for signature packing.
    pub enum PackingStrategy: u32 {
        /// Let the target decide; currently the same as `PrefixStable`.
        Default = 0,
        /// Elements keep their placement as later elements are appended.
        PrefixStable = 1,
        /// Pack the whole signature together. Identical placement of any one
        /// element requires the full element list in the same order.
        Optimized = 2,
        Invalid = 3,
    }
}

dxil_enum! {
    /// Scalar component type of a signature element or resource.
    pub enum ComponentType: u8 {
        Invalid = 0,
        I1 = 1,
        I16 = 2,
        U16 = 3,
        I32 = 4,
        U32 = 5,
        I64 = 6,
        U64 = 7,
        F16 = 8,
        F32 = 9,
        F64 = 10,
        SNormF16 = 11,
        UNormF16 = 12,
        SNormF32 = 13,
        UNormF32 = 14,
        SNormF64 = 15,
        UNormF64 = 16,
        LastEntry = 17,
    }
}

dxil_enum! {
    pub enum InterpolationMode: u8 {
        Undefined = 0,
        Constant = 1,
        Linear = 2,
        LinearCentroid = 3,
        LinearNoperspective = 4,
        LinearNoperspectiveCentroid = 5,
        LinearSample = 6,
        LinearNoperspectiveSample = 7,
        Invalid = 8,
    }
}

dxil_enum! {
    /// Width in bits of each scalar in a signature element.
    pub enum SignatureDataWidth: u8 {
        Undefined = 0,
        Bits16 = 16,
        Bits32 = 32,
    }
}

dxil_enum! {
    /// Denormal handling for 32-bit floats.
    pub enum Float32DenormMode: u32 {
        /// Denormal behavior is undefined.
        Any = 0,
        /// Denormal inputs and outputs are preserved.
        Preserve = 1,
        /// Denormal inputs are preserved, denormal outputs flushed to zero.
        Ftz = 2,
        Reserve3 = 3,
        Reserve4 = 4,
        Reserve5 = 5,
        Reserve6 = 6,
        Reserve7 = 7,
    }
}

dxil_enum! {
    pub enum LowPrecisionMode: u32 {
        Undefined = 0,
        UseMinPrecision = 1,
        UseNativeLowPrecision = 2,
    }
}

/// Function attribute key carrying the fp32 denormal mode.
pub const FP32_DENORM_KIND_STRING: &str = "fp32-denorm-mode";
pub const FP32_DENORM_VALUE_ANY_STRING: &str = "any";
pub const FP32_DENORM_VALUE_PRESERVE_STRING: &str = "preserve";
pub const FP32_DENORM_VALUE_FTZ_STRING: &str = "ftz";

impl Float32DenormMode {
    /// Spelling used as the value of the [`FP32_DENORM_KIND_STRING`] function
    /// attribute. Reserved modes have none.
    pub const fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Any => Some(FP32_DENORM_VALUE_ANY_STRING),
            Self::Preserve => Some(FP32_DENORM_VALUE_PRESERVE_STRING),
            Self::Ftz => Some(FP32_DENORM_VALUE_FTZ_STRING),
            Self::Reserve3 | Self::Reserve4 | Self::Reserve5 | Self::Reserve6 | Self::Reserve7 => {
                None
            }
        }
    }

    pub fn from_attribute_value(value: &str) -> Option<Self> {
        match value {
            FP32_DENORM_VALUE_ANY_STRING => Some(Self::Any),
            FP32_DENORM_VALUE_PRESERVE_STRING => Some(Self::Preserve),
            FP32_DENORM_VALUE_FTZ_STRING => Some(Self::Ftz),
            _ => None,
        }
    }

    pub const fn is_reserved(self) -> bool {
        self.raw() >= Self::Reserve3.raw()
    }
}
