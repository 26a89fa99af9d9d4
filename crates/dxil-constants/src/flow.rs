use crate::macros::dxil_enum;

dxil_enum! {
    /// Hint attached to a branch, switch or call.
    ///
    /// Loop unrolling is expressed through `llvm.loop.unroll` metadata and has
    /// no hint here.
    pub enum ControlFlowHint: u32 {
        Undefined = 0,
        Branch = 1,
        Flatten = 2,
        FastOpt = 3,
        AllowUavCondition = 4,
        ForceCase = 5,
        Call = 6,
        LastEntry = 7,
    }
}
