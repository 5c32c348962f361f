pub mod response;
pub mod types;

pub use response::{
    close, delegate, elicit_slot, ContentType, DialogAction, FulfillmentState, LexResponse,
    Message,
};
pub use types::{Bot, CurrentIntent, InvocationSource, LexEvent, SessionAttributes, Slots};
