pub mod clock;
pub mod input_adapter;
pub mod input_session;

pub use clock::Clock;
pub use input_adapter::WinitController;
pub use input_session::{InputSession, PointerEvent};
