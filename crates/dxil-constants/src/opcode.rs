use crate::macros::dxil_enum;
use crate::DxilVersion;

dxil_enum! {
    /// DXIL operation identifier, passed as operand 0 of every `dx.op.*` call.
    ///
    /// Values are append-only across DXIL versions: every operation introduced
    /// by a later version is numbered above all operations of earlier ones.
    pub enum OpCode: u32 {
        // DXIL 1.0
        /// Reads a temporary register (DXBC conversion helper).
        TempRegLoad = 0,
        /// Writes a temporary register (DXBC conversion helper).
        TempRegStore = 1,
        /// Min-precision load from an indexable register.
        MinPrecXRegLoad = 2,
        /// Min-precision store to an indexable register.
        MinPrecXRegStore = 3,
        /// Reads a component of a shader input signature element.
        LoadInput = 4,
        /// Writes a component of a shader output signature element.
        StoreOutput = 5,
        FAbs = 6,
        /// Clamps to `[0.0, 1.0]`.
        Saturate = 7,
        IsNaN = 8,
        IsInf = 9,
        IsFinite = 10,
        IsNormal = 11,
        Cos = 12,
        Sin = 13,
        Tan = 14,
        Acos = 15,
        Asin = 16,
        Atan = 17,
        Hcos = 18,
        Hsin = 19,
        Htan = 20,
        /// Base-2 exponential.
        Exp = 21,
        /// Fractional part.
        Frc = 22,
        /// Base-2 logarithm.
        Log = 23,
        Sqrt = 24,
        /// `1 / sqrt(x)`.
        Rsqrt = 25,
        /// Round to nearest even.
        RoundNe = 26,
        /// Round towards negative infinity.
        RoundNi = 27,
        /// Round towards positive infinity.
        RoundPi = 28,
        /// Round towards zero.
        RoundZ = 29,
        /// Reverses bit order.
        Bfrev = 30,
        /// Population count.
        Countbits = 31,
        /// Index of the lowest set bit.
        FirstbitLo = 32,
        /// Index of the highest set bit.
        FirstbitHi = 33,
        /// Index of the highest bit that differs from the sign bit.
        FirstbitSHi = 34,
        /// `a` if `a >= b`, otherwise `b`.
        FMax = 35,
        /// `a` if `a < b`, otherwise `b`.
        FMin = 36,
        IMax = 37,
        IMin = 38,
        UMax = 39,
        UMin = 40,
        /// Signed 32x32 multiply producing both halves of the 64-bit product.
        IMul = 41,
        /// Unsigned 32x32 multiply producing both halves of the 64-bit product.
        UMul = 42,
        /// Unsigned quotient and remainder.
        UDiv = 43,
        /// Unsigned add returning the carry.
        UAddc = 44,
        /// Unsigned subtract returning the borrow.
        USubb = 45,
        /// Multiply-add; rounding of the intermediate product is unspecified.
        FMad = 46,
        /// Fused multiply-add.
        Fma = 47,
        IMad = 48,
        UMad = 49,
        /// Masked sum of absolute byte differences.
        Msad = 50,
        /// Signed bitfield extract.
        Ibfe = 51,
        /// Unsigned bitfield extract.
        Ubfe = 52,
        /// Bitfield insert.
        Bfi = 53,
        Dot2 = 54,
        Dot3 = 55,
        Dot4 = 56,
        /// Creates a handle to a bound resource (see `operand_index::CREATE_HANDLE_*`).
        CreateHandle = 57,
        CBufferLoad = 58,
        /// Loads a 16-byte row from a constant buffer.
        CBufferLoadLegacy = 59,
        Sample = 60,
        SampleBias = 61,
        SampleLevel = 62,
        SampleGrad = 63,
        SampleCmp = 64,
        /// Comparison sample at mip level zero.
        SampleCmpLevelZero = 65,
        /// Unfiltered texel read.
        TextureLoad = 66,
        /// Typed texel write.
        TextureStore = 67,
        /// Reads from a typed buffer.
        BufferLoad = 68,
        /// Writes to a typed RW buffer.
        BufferStore = 69,
        /// Increments or decrements the hidden counter of an append/consume UAV.
        BufferUpdateCounter = 70,
        /// Whether a tiled-resource access only touched mapped tiles.
        CheckAccessFullyMapped = 71,
        GetDimensions = 72,
        TextureGather = 73,
        TextureGatherCmp = 74,
        Texture2DMSGetSamplePosition = 75,
        RenderTargetGetSamplePosition = 76,
        RenderTargetGetSampleCount = 77,
        /// Atomic read-modify-write; the operation is an `AtomicBinOpCode`.
        AtomicBinOp = 78,
        AtomicCompareExchange = 79,
        /// Memory and execution barrier; the mode is a `BarrierMode` mask.
        Barrier = 80,
        CalculateLOD = 81,
        /// Discards the current pixel.
        Discard = 82,
        /// Per-quad rate of change in x.
        DerivCoarseX = 83,
        /// Per-quad rate of change in y.
        DerivCoarseY = 84,
        /// Per-pixel rate of change in x.
        DerivFineX = 85,
        /// Per-pixel rate of change in y.
        DerivFineY = 86,
        /// Evaluates an input at the pixel center plus a snapped offset.
        EvalSnapped = 87,
        /// Evaluates an input at a sample location.
        EvalSampleIndex = 88,
        /// Evaluates an input at the centroid.
        EvalCentroid = 89,
        SampleIndex = 90,
        /// Pixel shader input coverage mask.
        Coverage = 91,
        /// Underestimated coverage from conservative rasterization.
        InnerCoverage = 92,
        /// `SV_DispatchThreadID`.
        ThreadId = 93,
        /// `SV_GroupID`.
        GroupId = 94,
        /// `SV_GroupThreadID`.
        ThreadIdInGroup = 95,
        /// `SV_GroupIndex`.
        FlattenedThreadIdInGroup = 96,
        /// Emits a vertex to a stream.
        EmitStream = 97,
        /// Ends the current primitive strip on a stream.
        CutStream = 98,
        /// `EmitStream` followed by `CutStream`.
        EmitThenCutStream = 99,
        GSInstanceID = 100,
        /// Builds a double from low and high 32-bit halves.
        MakeDouble = 101,
        /// Splits a double into low and high 32-bit halves.
        SplitDouble = 102,
        LoadOutputControlPoint = 103,
        LoadPatchConstant = 104,
        DomainLocation = 105,
        StorePatchConstant = 106,
        OutputControlPointID = 107,
        PrimitiveID = 108,
        CycleCounterLegacy = 109,
        WaveIsFirstLane = 110,
        WaveGetLaneIndex = 111,
        WaveGetLaneCount = 112,
        WaveAnyTrue = 113,
        WaveAllTrue = 114,
        WaveActiveAllEqual = 115,
        WaveActiveBallot = 116,
        WaveReadLaneAt = 117,
        WaveReadLaneFirst = 118,
        /// Reduction across active lanes; see `WaveOpKind` and `SignedOpKind`.
        WaveActiveOp = 119,
        /// Bitwise reduction across active lanes; see `WaveBitOpKind`.
        WaveActiveBit = 120,
        /// Exclusive prefix reduction over lower lanes.
        WavePrefixOp = 121,
        QuadReadLaneAt = 122,
        /// Quad-level read; see `QuadOpKind`.
        QuadOp = 123,
        BitcastI16toF16 = 124,
        BitcastF16toI16 = 125,
        BitcastI32toF32 = 126,
        BitcastF32toI32 = 127,
        BitcastI64toF64 = 128,
        BitcastF64toI64 = 129,
        LegacyF32ToF16 = 130,
        LegacyF16ToF32 = 131,
        LegacyDoubleToFloat = 132,
        LegacyDoubleToSInt32 = 133,
        LegacyDoubleToUInt32 = 134,
        /// Number of active lanes with the predicate set.
        WaveAllBitCount = 135,
        /// Number of lower active lanes with the predicate set.
        WavePrefixBitCount = 136,

        // DXIL 1.1
        /// Reads an attribute as provided by a specific vertex.
        AttributeAtVertex = 137,
        /// Current view index.
        ViewID = 138,

        // DXIL 1.2
        /// Reads from a raw or structured buffer.
        RawBufferLoad = 139,
        /// Writes to a raw or structured RW buffer.
        RawBufferStore = 140,

        // DXIL 1.3
        /// User-provided instance ID of the current bottom-level instance.
        InstanceID = 141,
        /// Generated index of the current instance in the top-level structure.
        InstanceIndex = 142,
        /// Hit kind reported by the intersection; see `HitKind`.
        HitKind = 143,
        /// Ray flags of the current ray; see `RayFlag`.
        RayFlags = 144,
        DispatchRaysIndex = 145,
        DispatchRaysDimensions = 146,
        WorldRayOrigin = 147,
        WorldRayDirection = 148,
        ObjectRayOrigin = 149,
        ObjectRayDirection = 150,
        ObjectToWorld = 151,
        WorldToObject = 152,
        /// Parametric start of the current ray.
        RayTMin = 153,
        /// Parametric end of the current ray.
        RayTCurrent = 154,
        /// Rejects the current intersection (any-hit shaders).
        IgnoreHit = 155,
        /// Commits the current hit and stops the traversal (any-hit shaders).
        AcceptHitAndEndSearch = 156,
        /// Starts a ray traversal.
        TraceRay = 157,
        /// Reports an intersection; returns whether it was accepted.
        ReportHit = 158,
        /// Invokes a callable shader from the shader table.
        CallShader = 159,
        /// Creates a handle from a resource struct in library shaders.
        CreateHandleForLib = 160,
        /// Primitive index inside the current geometry (ray tracing).
        PrimitiveIndex = 161,
    }
}

impl OpCode {
    pub const NUM_OP_CODES_DXIL_1_0: u32 = 137;
    pub const NUM_OP_CODES_DXIL_1_1: u32 = 139;
    pub const NUM_OP_CODES_DXIL_1_2: u32 = 141;
    pub const NUM_OP_CODES_DXIL_1_3: u32 = 162;

    /// Exclusive upper bound of all operation values.
    pub const NUM_OP_CODES: u32 = 162;

    /// Number of operations defined by `version`, or `None` for versions
    /// without a published count.
    pub const fn num_for_version(version: DxilVersion) -> Option<u32> {
        if version.major != 1 {
            return None;
        }
        match version.minor {
            0 => Some(Self::NUM_OP_CODES_DXIL_1_0),
            1 => Some(Self::NUM_OP_CODES_DXIL_1_1),
            2 => Some(Self::NUM_OP_CODES_DXIL_1_2),
            3 => Some(Self::NUM_OP_CODES_DXIL_1_3),
            _ => None,
        }
    }

    /// Whether a module targeting `version` may use this operation.
    pub const fn is_available_in(self, version: DxilVersion) -> bool {
        match Self::num_for_version(version) {
            Some(count) => self.raw() < count,
            None => false,
        }
    }

    /// The first DXIL version that defines this operation.
    pub const fn min_dxil_version(self) -> DxilVersion {
        let raw = self.raw();
        if raw < Self::NUM_OP_CODES_DXIL_1_0 {
            DxilVersion::new(1, 0)
        } else if raw < Self::NUM_OP_CODES_DXIL_1_1 {
            DxilVersion::new(1, 1)
        } else if raw < Self::NUM_OP_CODES_DXIL_1_2 {
            DxilVersion::new(1, 2)
        } else {
            DxilVersion::new(1, 3)
        }
    }
}

dxil_enum! {
    /// Groups of operations that share one function signature template.
    ///
    /// Numbering follows the table generator's sort order, not introduction
    /// order, so a class value says nothing about the version that added it.
    pub enum OpCodeClass: u32 {
        AcceptHitAndEndSearch = 0,
        IgnoreHit = 1,
        BinaryWithCarryOrBorrow = 2,
        BinaryWithTwoOuts = 3,
        Binary = 4,
        BitcastF16toI16 = 5,
        BitcastF32toI32 = 6,
        BitcastF64toI64 = 7,
        BitcastI16toF16 = 8,
        BitcastI32toF32 = 9,
        BitcastI64toF64 = 10,
        FlattenedThreadIdInGroup = 11,
        GroupId = 12,
        ThreadId = 13,
        ThreadIdInGroup = 14,
        LoadOutputControlPoint = 15,
        LoadPatchConstant = 16,
        DomainLocation = 17,
        Dot2 = 18,
        Dot3 = 19,
        Dot4 = 20,
        LegacyDoubleToFloat = 21,
        LegacyDoubleToSInt32 = 22,
        LegacyDoubleToUInt32 = 23,
        MakeDouble = 24,
        SplitDouble = 25,
        CutStream = 26,
        EmitStream = 27,
        EmitThenCutStream = 28,
        GSInstanceID = 29,
        ViewID = 30,
        OutputControlPointID = 31,
        StorePatchConstant = 32,
        PrimitiveID = 33,
        CallShader = 34,
        ReportHit = 35,
        TraceRay = 36,
        LlvmInst = 37,
        LegacyF16ToF32 = 38,
        LegacyF32ToF16 = 39,
        CreateHandleForLib = 40,
        CycleCounterLegacy = 41,
        AttributeAtVertex = 42,
        CalculateLOD = 43,
        Coverage = 44,
        Discard = 45,
        EvalCentroid = 46,
        EvalSampleIndex = 47,
        EvalSnapped = 48,
        InnerCoverage = 49,
        SampleIndex = 50,
        Unary = 51,
        Quaternary = 52,
        DispatchRaysDimensions = 53,
        DispatchRaysIndex = 54,
        ObjectToWorld = 55,
        WorldToObject = 56,
        WorldRayDirection = 57,
        WorldRayOrigin = 58,
        ObjectRayDirection = 59,
        ObjectRayOrigin = 60,
        RayTCurrent = 61,
        RayTMin = 62,
        HitKind = 63,
        InstanceID = 64,
        InstanceIndex = 65,
        PrimitiveIndex = 66,
        RayFlags = 67,
        TextureGather = 68,
        TextureGatherCmp = 69,
        RenderTargetGetSampleCount = 70,
        RenderTargetGetSamplePosition = 71,
        Sample = 72,
        SampleBias = 73,
        SampleCmp = 74,
        SampleCmpLevelZero = 75,
        SampleGrad = 76,
        SampleLevel = 77,
        Texture2DMSGetSamplePosition = 78,
        BufferLoad = 79,
        BufferStore = 80,
        BufferUpdateCounter = 81,
        CBufferLoad = 82,
        CBufferLoadLegacy = 83,
        CheckAccessFullyMapped = 84,
        CreateHandle = 85,
        GetDimensions = 86,
        RawBufferLoad = 87,
        RawBufferStore = 88,
        TextureLoad = 89,
        TextureStore = 90,
        AtomicBinOp = 91,
        AtomicCompareExchange = 92,
        Barrier = 93,
        LoadInput = 94,
        MinPrecXRegLoad = 95,
        MinPrecXRegStore = 96,
        StoreOutput = 97,
        TempRegLoad = 98,
        TempRegStore = 99,
        Tertiary = 100,
        IsSpecialFloat = 101,
        UnaryBits = 102,
        QuadOp = 103,
        QuadReadLaneAt = 104,
        WaveActiveAllEqual = 105,
        WaveActiveBallot = 106,
        WaveActiveBit = 107,
        WaveActiveOp = 108,
        WaveAllOp = 109,
        WaveAllTrue = 110,
        WaveAnyTrue = 111,
        WaveGetLaneCount = 112,
        WaveGetLaneIndex = 113,
        WaveIsFirstLane = 114,
        WavePrefixOp = 115,
        WaveReadLaneAt = 116,
        WaveReadLaneFirst = 117,
    }
}

impl OpCodeClass {
    pub const NUM_OP_CLASSES_DXIL_1_0: u32 = 93;
    pub const NUM_OP_CLASSES_DXIL_1_1: u32 = 95;
    pub const NUM_OP_CLASSES_DXIL_1_2: u32 = 97;
    pub const NUM_OP_CLASSES_DXIL_1_3: u32 = 118;

    /// Exclusive upper bound of all class values.
    pub const NUM_OP_CLASSES: u32 = 118;

    /// Number of operation classes defined by `version`.
    pub const fn num_for_version(version: DxilVersion) -> Option<u32> {
        if version.major != 1 {
            return None;
        }
        match version.minor {
            0 => Some(Self::NUM_OP_CLASSES_DXIL_1_0),
            1 => Some(Self::NUM_OP_CLASSES_DXIL_1_1),
            2 => Some(Self::NUM_OP_CLASSES_DXIL_1_2),
            3 => Some(Self::NUM_OP_CLASSES_DXIL_1_3),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_cover_every_value_below_the_bound() {
        assert_eq!(OpCode::ALL.len() as u32, OpCode::NUM_OP_CODES);
        for (i, op) in OpCode::ALL.iter().enumerate() {
            assert_eq!(op.raw(), i as u32, "{op} is out of order");
        }
        assert_eq!(OpCode::from_raw(OpCode::NUM_OP_CODES), None);
    }

    #[test]
    fn classes_cover_every_value_below_the_bound() {
        assert_eq!(OpCodeClass::ALL.len() as u32, OpCodeClass::NUM_OP_CLASSES);
        for (i, class) in OpCodeClass::ALL.iter().enumerate() {
            assert_eq!(class.raw(), i as u32, "{class} is out of order");
        }
    }

    #[test]
    fn version_counts_are_monotonic_and_end_at_the_bound() {
        let versions = [0u8, 1, 2, 3].map(|minor| DxilVersion::new(1, minor));
        let ops = versions.map(|v| OpCode::num_for_version(v).unwrap());
        let classes = versions.map(|v| OpCodeClass::num_for_version(v).unwrap());
        assert!(ops.windows(2).all(|w| w[0] < w[1]));
        assert!(classes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ops[3], OpCode::NUM_OP_CODES);
        assert_eq!(classes[3], OpCodeClass::NUM_OP_CLASSES);
        assert_eq!(OpCode::num_for_version(DxilVersion::new(1, 4)), None);
        assert_eq!(OpCode::num_for_version(DxilVersion::new(0, 0)), None);
    }

    #[test]
    fn availability_follows_introduction_version() {
        let v1_0 = DxilVersion::new(1, 0);
        let v1_1 = DxilVersion::new(1, 1);
        let v1_2 = DxilVersion::new(1, 2);
        let v1_3 = DxilVersion::new(1, 3);

        assert_eq!(OpCode::WavePrefixBitCount.min_dxil_version(), v1_0);
        assert!(OpCode::WavePrefixBitCount.is_available_in(v1_0));

        assert_eq!(OpCode::AttributeAtVertex.min_dxil_version(), v1_1);
        assert!(!OpCode::AttributeAtVertex.is_available_in(v1_0));
        assert!(OpCode::ViewID.is_available_in(v1_1));

        assert_eq!(OpCode::RawBufferStore.min_dxil_version(), v1_2);
        assert!(!OpCode::RawBufferLoad.is_available_in(v1_1));

        assert_eq!(OpCode::TraceRay.min_dxil_version(), v1_3);
        assert!(OpCode::PrimitiveIndex.is_available_in(v1_3));
        assert!(!OpCode::TraceRay.is_available_in(v1_2));
        assert!(!OpCode::TempRegLoad.is_available_in(DxilVersion::new(1, 9)));
    }

    #[test]
    fn every_opcode_is_available_in_its_min_version() {
        for &op in OpCode::ALL {
            let min = op.min_dxil_version();
            assert!(op.is_available_in(min), "{op}");
            assert!(op.is_available_in(DxilVersion::CURRENT), "{op}");
        }
    }
}
