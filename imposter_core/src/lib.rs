pub mod api;
pub mod error;
pub mod image;
pub mod language;
pub mod player;
pub mod resolver;
pub mod rng;
pub mod round;
pub mod session;
pub mod swipe;
pub mod utils;
pub mod word;

pub use error::{ResolveError, SessionError};
pub use image::{Attribution, Credit, ImagePick};
pub use language::{Category, Language};
pub use player::{Player, PlayerId};
pub use resolver::{ImageResolver, ImageStrategy, PhotoProvider, Resolution, WordSource};
pub use rng::{IndexPicker, ScriptedPicker};
pub use round::{GameMode, Round, RoundComposer, RoundId, RoundPayload, RoundRequest, Slot};
pub use session::{CardContent, CardView, Deferred, DeferredUpdate, GameSession, Phase, Ticket};
pub use swipe::{SwipeOutcome, SwipeState};
pub use word::WordRecord;
