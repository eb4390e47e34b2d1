pub mod board_json;

pub use board_json::{
    apply_board_op_json, formations_json, hydrate_board_json, ApplyRequest, BoardOp, BoardResponse,
    HydrateRequest,
};
