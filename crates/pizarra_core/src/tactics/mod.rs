// Formation catalog for the tactical board.

pub mod formations;

pub use formations::{
    FormationKey, FormationTemplate, SlotCoord, TOKEN_COUNT,
};
