use crate::macros::dxil_enum;

dxil_enum! {
    /// Geometry/hull shader input primitive.
    ///
    /// Values 4 and 5 are reserved and keep their slots; patch primitives
    /// encode the control-point count as `7 + n`.
    pub enum InputPrimitive: u32 {
        Undefined = 0,
        Point = 1,
        Line = 2,
        Triangle = 3,
        Reserved4 = 4,
        Reserved5 = 5,
        LineWithAdjacency = 6,
        TriangleWithAdjacency = 7,
        ControlPointPatch1 = 8,
        ControlPointPatch2 = 9,
        ControlPointPatch3 = 10,
        ControlPointPatch4 = 11,
        ControlPointPatch5 = 12,
        ControlPointPatch6 = 13,
        ControlPointPatch7 = 14,
        ControlPointPatch8 = 15,
        ControlPointPatch9 = 16,
        ControlPointPatch10 = 17,
        ControlPointPatch11 = 18,
        ControlPointPatch12 = 19,
        ControlPointPatch13 = 20,
        ControlPointPatch14 = 21,
        ControlPointPatch15 = 22,
        ControlPointPatch16 = 23,
        ControlPointPatch17 = 24,
        ControlPointPatch18 = 25,
        ControlPointPatch19 = 26,
        ControlPointPatch20 = 27,
        ControlPointPatch21 = 28,
        ControlPointPatch22 = 29,
        ControlPointPatch23 = 30,
        ControlPointPatch24 = 31,
        ControlPointPatch25 = 32,
        ControlPointPatch26 = 33,
        ControlPointPatch27 = 34,
        ControlPointPatch28 = 35,
        ControlPointPatch29 = 36,
        ControlPointPatch30 = 37,
        ControlPointPatch31 = 38,
        ControlPointPatch32 = 39,
        LastEntry = 40,
    }
}

const CONTROL_POINT_PATCH_BASE: u32 = InputPrimitive::ControlPointPatch1.raw() - 1;

impl InputPrimitive {
    /// Control points per patch for `ControlPointPatchN`, `None` otherwise.
    pub const fn control_point_count(self) -> Option<u32> {
        let raw = self.raw();
        if raw >= Self::ControlPointPatch1.raw() && raw <= Self::ControlPointPatch32.raw() {
            Some(raw - CONTROL_POINT_PATCH_BASE)
        } else {
            None
        }
    }

    /// `ControlPointPatchN` for `count` in `1..=32`.
    pub const fn from_control_point_count(count: u32) -> Option<Self> {
        if count == 0 || count > crate::limits::MAX_IA_PATCH_CONTROL_POINT_COUNT {
            return None;
        }
        Self::from_raw(CONTROL_POINT_PATCH_BASE + count)
    }

    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved4 | Self::Reserved5)
    }
}

dxil_enum! {
    /// Geometry shader output / input-assembler primitive topology.
    pub enum PrimitiveTopology: u32 {
        Undefined = 0,
        PointList = 1,
        LineList = 2,
        LineStrip = 3,
        TriangleList = 4,
        TriangleStrip = 5,
        LastEntry = 6,
    }
}

dxil_enum! {
    pub enum TessellatorDomain: u32 {
        Undefined = 0,
        IsoLine = 1,
        Tri = 2,
        Quad = 3,
        LastEntry = 4,
    }
}

dxil_enum! {
    pub enum TessellatorOutputPrimitive: u32 {
        Undefined = 0,
        Point = 1,
        Line = 2,
        TriangleCW = 3,
        TriangleCCW = 4,
        LastEntry = 5,
    }
}

dxil_enum! {
    pub enum TessellatorPartitioning: u32 {
        Undefined = 0,
        Integer = 1,
        Pow2 = 2,
        FractionalOdd = 3,
        FractionalEven = 4,
        LastEntry = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_control_point_counts_round_trip() {
        for count in 1..=32 {
            let prim = InputPrimitive::from_control_point_count(count).unwrap();
            assert_eq!(prim.control_point_count(), Some(count));
            assert_eq!(prim.raw(), 7 + count);
        }
        assert_eq!(InputPrimitive::from_control_point_count(0), None);
        assert_eq!(InputPrimitive::from_control_point_count(33), None);
    }

    #[test]
    fn non_patch_primitives_have_no_control_points() {
        for prim in [
            InputPrimitive::Undefined,
            InputPrimitive::Point,
            InputPrimitive::TriangleWithAdjacency,
            InputPrimitive::LastEntry,
        ] {
            assert_eq!(prim.control_point_count(), None, "{prim}");
        }
    }

    #[test]
    fn reserved_input_primitive_slots_are_kept() {
        assert_eq!(InputPrimitive::from_raw(4), Some(InputPrimitive::Reserved4));
        assert_eq!(InputPrimitive::from_raw(5), Some(InputPrimitive::Reserved5));
        assert!(InputPrimitive::Reserved4.is_reserved());
        assert!(!InputPrimitive::LineWithAdjacency.is_reserved());
        assert_eq!(InputPrimitive::LineWithAdjacency.raw(), 6);
    }
}
