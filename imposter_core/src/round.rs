use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::EnumMessage;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

use crate::{
    error::ResolveError,
    image::ImagePick,
    language::{Category, Language},
    player::PlayerId,
    resolver::{ImageResolver, WordSource},
    rng::IndexPicker,
    word::WordRecord,
};

pub type RoundId = u64;

#[derive(
    Debug, PartialEq, Eq, Copy, Clone, Display, EnumIter, EnumString, EnumMessage, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[strum(message = "Imposter: everybody but one player shares the secret")]
    Imposter,
    #[strum(message = "Wortduell: two players, each sees the other's secret")]
    Duel,
}

impl GameMode {
    pub fn player_bounds(&self) -> (usize, usize) {
        match self {
            GameMode::Imposter => (3, 12),
            GameMode::Duel => (2, 2),
        }
    }

    pub fn default_player_count(&self) -> usize {
        match self {
            GameMode::Imposter => 5,
            GameMode::Duel => 2,
        }
    }

    pub fn accepts(&self, count: usize) -> bool {
        let (min, max) = self.player_bounds();
        (min..=max).contains(&count)
    }

    pub fn describe(&self) -> &'static str {
        self.get_message().unwrap_or("")
    }
}

/// One secret of a round: the word, its display term and its image.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPayload {
    pub word: WordRecord,
    pub term: String,
    pub image: Option<ImagePick>,
    lazy_lookup_requested: bool,
}

impl RoundPayload {
    pub fn new(word: WordRecord, lang: Language, image: Option<ImagePick>) -> Self {
        let term = word.display_term(lang).to_string();
        RoundPayload {
            word,
            term,
            image,
            lazy_lookup_requested: false,
        }
    }

    /// True exactly once, and only while the payload still lacks an image.
    pub fn request_lazy_lookup(&mut self) -> bool {
        if self.image.is_some() || self.lazy_lookup_requested {
            return false;
        }
        self.lazy_lookup_requested = true;
        true
    }
}

/// Addresses one payload inside a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Shared,
    /// Duel secret that the given player has to guess.
    HiddenFrom(PlayerId),
}

#[derive(Debug, Clone, PartialEq)]
enum Secrets {
    Shared {
        payload: RoundPayload,
        impostor: PlayerId,
    },
    Duel {
        hidden_from: [RoundPayload; 2],
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: RoundId,
    pub lang: Language,
    secrets: Secrets,
}

impl Round {
    pub fn shared(id: RoundId, lang: Language, payload: RoundPayload, impostor: PlayerId) -> Self {
        Round {
            id,
            lang,
            secrets: Secrets::Shared { payload, impostor },
        }
    }

    /// `for_a` is hidden from player 0 and shown to player 1, `for_b` the reverse.
    pub fn duel(id: RoundId, lang: Language, for_a: RoundPayload, for_b: RoundPayload) -> Self {
        Round {
            id,
            lang,
            secrets: Secrets::Duel {
                hidden_from: [for_a, for_b],
            },
        }
    }

    pub fn mode(&self) -> GameMode {
        match self.secrets {
            Secrets::Shared { .. } => GameMode::Imposter,
            Secrets::Duel { .. } => GameMode::Duel,
        }
    }

    pub fn impostor(&self) -> Option<PlayerId> {
        match self.secrets {
            Secrets::Shared { impostor, .. } => Some(impostor),
            Secrets::Duel { .. } => None,
        }
    }

    /// The slot whose secret `player` gets to see, `None` for the impostor.
    pub fn slot_shown_to(&self, player: PlayerId) -> Option<Slot> {
        match self.secrets {
            Secrets::Shared { impostor, .. } if impostor == player => None,
            Secrets::Shared { .. } => Some(Slot::Shared),
            Secrets::Duel { .. } if player < 2 => Some(Slot::HiddenFrom(1 - player)),
            Secrets::Duel { .. } => None,
        }
    }

    pub fn payload(&self, slot: Slot) -> Option<&RoundPayload> {
        match (&self.secrets, slot) {
            (Secrets::Shared { payload, .. }, Slot::Shared) => Some(payload),
            (Secrets::Duel { hidden_from }, Slot::HiddenFrom(p)) => hidden_from.get(p),
            _ => None,
        }
    }

    pub fn payload_mut(&mut self, slot: Slot) -> Option<&mut RoundPayload> {
        match (&mut self.secrets, slot) {
            (Secrets::Shared { payload, .. }, Slot::Shared) => Some(payload),
            (Secrets::Duel { hidden_from }, Slot::HiddenFrom(p)) => hidden_from.get_mut(p),
            _ => None,
        }
    }

    pub fn payloads(&self) -> Vec<&RoundPayload> {
        match &self.secrets {
            Secrets::Shared { payload, .. } => vec![payload],
            Secrets::Duel { hidden_from } => hidden_from.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundRequest {
    pub lang: Language,
    pub category: Option<Category>,
    pub player_count: usize,
    pub mode: GameMode,
}

pub struct RoundComposer {
    words: Arc<dyn WordSource>,
    images: Arc<ImageResolver>,
}

impl RoundComposer {
    pub fn new(words: Arc<dyn WordSource>, images: Arc<ImageResolver>) -> Self {
        RoundComposer { words, images }
    }

    pub fn images(&self) -> Arc<ImageResolver> {
        self.images.clone()
    }

    pub async fn compose<P>(
        &self,
        request: &RoundRequest,
        id: RoundId,
        picker: &mut P,
    ) -> Result<Round, ResolveError>
    where
        P: IndexPicker + ?Sized,
    {
        let round = match request.mode {
            GameMode::Imposter => {
                let word = self.fetch_word(request).await?;
                let image = self.images.resolve(&word).await;
                let impostor = picker.pick_index(request.player_count.max(1));
                Round::shared(id, request.lang, RoundPayload::new(word, request.lang, image), impostor)
            }
            GameMode::Duel => {
                let word_a = self.fetch_word(request).await?;
                let mut word_b = self.fetch_word(request).await?;
                if word_b.id == word_a.id {
                    // one more draw, distinctness stays best-effort
                    debug!("duel drew {} twice, drawing again", word_a.id);
                    word_b = self.fetch_word(request).await?;
                }
                let image_a = self.images.resolve(&word_a).await;
                let image_b = self.images.resolve(&word_b).await;
                Round::duel(
                    id,
                    request.lang,
                    RoundPayload::new(word_a, request.lang, image_a),
                    RoundPayload::new(word_b, request.lang, image_b),
                )
            }
        };
        info!(
            "round {} composed: {} mode, {} secret(s)",
            round.id,
            round.mode(),
            round.payloads().len()
        );
        Ok(round)
    }

    async fn fetch_word(&self, request: &RoundRequest) -> Result<WordRecord, ResolveError> {
        let word = self.words.fetch_word(request.lang, request.category).await?;
        if !word.is_valid() {
            return Err(ResolveError::InvalidRecord(word.id));
        }
        Ok(word)
    }
}
