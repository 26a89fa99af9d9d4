use crate::macros::dxil_enum;

dxil_enum! {
    /// Lane selected by `OpCode::QuadOp`.
    pub enum QuadOpKind: u32 {
        /// The other lane of the quad in the horizontal direction.
        ReadAcrossX = 0,
        /// The other lane of the quad in the vertical direction.
        ReadAcrossY = 1,
        /// The lane across the quad in both directions.
        ReadAcrossDiagonal = 2,
    }
}

dxil_enum! {
    pub enum WaveBitOpKind: u32 {
        And = 0,
        Or = 1,
        Xor = 2,
    }
}

dxil_enum! {
    /// Reduction performed by `OpCode::WaveActiveOp` and `OpCode::WavePrefixOp`.
    pub enum WaveOpKind: u32 {
        Sum = 0,
        Product = 1,
        Min = 2,
        Max = 3,
    }
}

dxil_enum! {
    /// Whether a wave reduction treats its operands as signed (or float) or
    /// unsigned integers.
    pub enum SignedOpKind: u32 {
        Signed = 0,
        Unsigned = 1,
    }
}
