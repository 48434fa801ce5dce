use log::{debug, info};

use crate::{
    error::SessionError,
    image::ImagePick,
    language::{Category, Language},
    player::{Player, PlayerId},
    resolver::{confirm_usage, ImageResolver, PhotoProvider},
    rng::IndexPicker,
    round::{GameMode, Round, RoundComposer, RoundId, RoundRequest, Slot},
    swipe::{SwipeOutcome, SwipeState},
    utils::RosterExtensions,
    word::WordRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Revealing(PlayerId),
    Complete,
}

/// Identifies the round, player and payload a deferred call was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub round: RoundId,
    pub player: PlayerId,
    pub slot: Slot,
}

/// Network work requested by a reveal, to be run detached.
#[derive(Debug, Clone, PartialEq)]
pub enum Deferred {
    ResolveImage { ticket: Ticket, word: WordRecord },
    ConfirmDownload { ticket: Ticket, download_location: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeferredUpdate {
    Image { ticket: Ticket, pick: Option<ImagePick> },
    ConfirmedUrl { ticket: Ticket, url: String },
}

impl Deferred {
    pub fn ticket(&self) -> Ticket {
        match self {
            Deferred::ResolveImage { ticket, .. } => *ticket,
            Deferred::ConfirmDownload { ticket, .. } => *ticket,
        }
    }

    pub async fn run(
        self,
        images: &ImageResolver,
        provider: &dyn PhotoProvider,
    ) -> Option<DeferredUpdate> {
        match self {
            Deferred::ResolveImage { ticket, word } => Some(DeferredUpdate::Image {
                ticket,
                pick: images.resolve(&word).await,
            }),
            Deferred::ConfirmDownload {
                ticket,
                download_location,
            } => confirm_usage(provider, &download_location)
                .await
                .map(|url| DeferredUpdate::ConfirmedUrl { ticket, url }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardContent<'a> {
    /// Card not opened yet.
    Covered,
    Impostor,
    /// `image` is `None` when nothing could be resolved; render a placeholder.
    Secret {
        term: &'a str,
        image: Option<&'a ImagePick>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView<'a> {
    pub player: &'a Player,
    pub opened: bool,
    pub progress: f32,
    pub content: CardContent<'a>,
}

/// Owns the whole game state of one device; every mutation goes through a
/// named transition.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    lang: Language,
    category: Option<Category>,
    players: Vec<Player>,
    phase: Phase,
    round: Option<Round>,
    swipe: SwipeState,
    last_round_id: RoundId,
}

impl GameSession {
    pub fn new(mode: GameMode, lang: Language, category: Option<Category>) -> Self {
        let mut players = vec![];
        players.resize_keeping_names(mode.default_player_count());
        GameSession {
            mode,
            lang,
            category,
            players,
            phase: Phase::Setup,
            round: None,
            swipe: SwipeState::new(),
            last_round_id: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn swipe(&self) -> &SwipeState {
        &self.swipe
    }

    // Setup ----------------------------------------------------------------

    pub fn set_language(&mut self, lang: Language) -> Result<(), SessionError> {
        self.ensure_setup()?;
        self.lang = lang;
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<Category>) -> Result<(), SessionError> {
        self.ensure_setup()?;
        self.category = category;
        Ok(())
    }

    pub fn set_player_count(&mut self, count: usize) -> Result<(), SessionError> {
        self.ensure_setup()?;
        if !self.mode.accepts(count) {
            return Err(SessionError::PlayerCount {
                mode: self.mode,
                count,
            });
        }
        self.players.resize_keeping_names(count);
        Ok(())
    }

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<(), SessionError> {
        self.ensure_setup()?;
        let player = self
            .players
            .get_mut(id)
            .ok_or(SessionError::UnknownPlayer(id))?;
        player.name = name.trim().to_string();
        Ok(())
    }

    pub fn round_request(&self) -> Result<RoundRequest, SessionError> {
        if !self.mode.accepts(self.players.len()) {
            return Err(SessionError::PlayerCount {
                mode: self.mode,
                count: self.players.len(),
            });
        }
        let missing = self.players.unnamed_seats();
        if !missing.is_empty() {
            return Err(SessionError::MissingNames(missing));
        }
        Ok(RoundRequest {
            lang: self.lang,
            category: self.category,
            player_count: self.players.len(),
            mode: self.mode,
        })
    }

    pub fn next_round_id(&self) -> RoundId {
        self.last_round_id + 1
    }

    // Round ----------------------------------------------------------------

    /// `Setup -> Revealing(0)` with an already composed round.
    pub fn start(&mut self, round: Round) -> Result<(), SessionError> {
        self.ensure_setup()?;
        let request = self.round_request()?;
        if round.mode() != request.mode {
            return Err(SessionError::RoundMode {
                expected: request.mode,
                got: round.mode(),
            });
        }
        if let Some(impostor) = round.impostor().filter(|&i| i >= request.player_count) {
            return Err(SessionError::UnknownPlayer(impostor));
        }
        self.begin(round);
        Ok(())
    }

    pub async fn start_round<P>(
        &mut self,
        composer: &RoundComposer,
        picker: &mut P,
    ) -> Result<(), SessionError>
    where
        P: IndexPicker + ?Sized,
    {
        self.ensure_setup()?;
        let request = self.round_request()?;
        let round = composer
            .compose(&request, self.next_round_id(), picker)
            .await?;
        self.begin(round);
        Ok(())
    }

    /// `Complete -> Revealing(0)` with a fresh round. Falls back to setup,
    /// roster intact, when no round could be composed.
    pub async fn new_round<P>(
        &mut self,
        composer: &RoundComposer,
        picker: &mut P,
    ) -> Result<(), SessionError>
    where
        P: IndexPicker + ?Sized,
    {
        if self.phase != Phase::Complete {
            return Err(SessionError::NotComplete);
        }
        let request = self.round_request()?;
        match composer
            .compose(&request, self.next_round_id(), picker)
            .await
        {
            Ok(round) => {
                self.begin(round);
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(e.into())
            }
        }
    }

    /// `Revealing(i) -> Revealing(i + 1)` or `Complete` after the last player.
    pub fn advance(&mut self) -> Result<Phase, SessionError> {
        let Phase::Revealing(current) = self.phase else {
            return Err(SessionError::NotRevealing);
        };
        if !self.swipe.opened() {
            return Err(SessionError::CardClosed);
        }
        let next = current + 1;
        if next < self.players.len() {
            self.enter(next);
        } else {
            self.phase = Phase::Complete;
            self.swipe.reset();
            info!("round {} complete", self.last_round_id);
        }
        Ok(self.phase)
    }

    /// Back to setup from anywhere; the roster is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
        self.round = None;
        self.swipe.reset();
    }

    fn begin(&mut self, round: Round) {
        self.last_round_id = round.id;
        self.round = Some(round);
        self.enter(0);
    }

    fn enter(&mut self, player: PlayerId) {
        self.phase = Phase::Revealing(player);
        self.swipe.reset();
    }

    fn ensure_setup(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Setup => Ok(()),
            _ => Err(SessionError::NotInSetup),
        }
    }

    // Gesture --------------------------------------------------------------

    pub fn pointer_down(&mut self, y: f32) {
        if matches!(self.phase, Phase::Revealing(_)) {
            self.swipe.pointer_down(y);
        }
    }

    pub fn pointer_move(&mut self, y: f32) {
        if matches!(self.phase, Phase::Revealing(_)) {
            self.swipe.pointer_move(y);
        }
    }

    /// Releases the drag. An opened card may request a lazy image lookup or
    /// the one-time usage accounting for its image.
    pub fn pointer_up(&mut self) -> Vec<Deferred> {
        let Phase::Revealing(player) = self.phase else {
            return vec![];
        };
        match self.swipe.pointer_up() {
            SwipeOutcome::Opened => self.on_opened(player),
            SwipeOutcome::SnappedBack | SwipeOutcome::Ignored => vec![],
        }
    }

    fn on_opened(&mut self, player: PlayerId) -> Vec<Deferred> {
        let Some(round) = self.round.as_mut() else {
            return vec![];
        };
        // the impostor's card never touches the secret
        let Some(slot) = round.slot_shown_to(player) else {
            return vec![];
        };
        let ticket = Ticket {
            round: round.id,
            player,
            slot,
        };
        let Some(payload) = round.payload_mut(slot) else {
            return vec![];
        };
        if let Some(image) = payload.image.as_mut() {
            return image
                .take_download_location()
                .map(|download_location| Deferred::ConfirmDownload {
                    ticket,
                    download_location,
                })
                .into_iter()
                .collect();
        }
        if payload.request_lazy_lookup() {
            return vec![Deferred::ResolveImage {
                ticket,
                word: payload.word.clone(),
            }];
        }
        vec![]
    }

    // Deferred results -----------------------------------------------------

    fn is_current_round(&self, ticket: &Ticket) -> bool {
        self.round.as_ref().map(|r| r.id) == Some(ticket.round)
    }

    fn is_on_screen(&self, ticket: &Ticket) -> bool {
        self.phase == Phase::Revealing(ticket.player) && self.is_current_round(ticket)
    }

    /// Applies a detached call's result. A found image is kept for the rest
    /// of its round; a confirmed URL only lands on the card it was issued
    /// for. Returns follow-up work.
    pub fn apply(&mut self, update: DeferredUpdate) -> Vec<Deferred> {
        let ticket = match &update {
            DeferredUpdate::Image { ticket, .. } | DeferredUpdate::ConfirmedUrl { ticket, .. } => *ticket,
        };
        let in_scope = match update {
            DeferredUpdate::Image { .. } => self.is_current_round(&ticket),
            DeferredUpdate::ConfirmedUrl { .. } => self.is_on_screen(&ticket),
        };
        if !in_scope {
            debug!("dropping stale update for round {} player {}", ticket.round, ticket.player);
            return vec![];
        }
        // the token is only spent by an opened card showing this payload
        let viewer = match self.phase {
            Phase::Revealing(player)
                if self.swipe.opened()
                    && self.round.as_ref().and_then(|r| r.slot_shown_to(player))
                        == Some(ticket.slot) =>
            {
                Some(player)
            }
            _ => None,
        };
        let Some(payload) = self
            .round
            .as_mut()
            .and_then(|r| r.payload_mut(ticket.slot))
        else {
            return vec![];
        };

        match update {
            DeferredUpdate::Image { pick: None, .. } => vec![],
            DeferredUpdate::Image { .. } if payload.image.is_some() => vec![],
            DeferredUpdate::Image {
                pick: Some(mut pick),
                ..
            } => {
                let follow_up = viewer.and_then(|player| {
                    pick.take_download_location()
                        .map(|download_location| Deferred::ConfirmDownload {
                            ticket: Ticket { player, ..ticket },
                            download_location,
                        })
                });
                payload.image = Some(pick);
                follow_up.into_iter().collect()
            }
            DeferredUpdate::ConfirmedUrl { url, .. } => {
                if let Some(image) = payload.image.as_mut() {
                    image.url = url;
                }
                vec![]
            }
        }
    }

    // View -----------------------------------------------------------------

    pub fn card_view(&self) -> Option<CardView<'_>> {
        let Phase::Revealing(player) = self.phase else {
            return None;
        };
        let round = self.round.as_ref()?;
        let opened = self.swipe.opened();
        let content = if !opened {
            CardContent::Covered
        } else {
            match round.slot_shown_to(player).and_then(|s| round.payload(s)) {
                None => CardContent::Impostor,
                Some(payload) => CardContent::Secret {
                    term: &payload.term,
                    image: payload.image.as_ref(),
                },
            }
        };
        Some(CardView {
            player: self.players.get(player)?,
            opened,
            progress: self.swipe.progress_percent(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::SessionError,
        image::ImagePick,
        language::Language,
        round::{GameMode, Round, RoundPayload, Slot},
        session::{CardContent, Deferred, DeferredUpdate, GameSession, Phase, Ticket},
        swipe::SwipeState,
        word::WordRecord,
    };

    #[test]
    fn start_should_require_every_name() {
        let mut session = GameSession::new(GameMode::Imposter, Language::De, None);
        session.set_player_count(3).unwrap();
        session.rename_player(0, "Ava").unwrap();
        session.rename_player(2, "  ").unwrap();

        let result = session.start(shared_round(1, 0, with_image()));

        assert_eq!(result, Err(SessionError::MissingNames(vec![1, 2])));
        assert_eq!(session.phase(), Phase::Setup);
    }

    #[test]
    fn player_count_should_respect_mode_bounds() {
        let mut session = GameSession::new(GameMode::Duel, Language::En, None);
        assert_eq!(session.players().len(), 2);
        assert_eq!(
            session.set_player_count(3),
            Err(SessionError::PlayerCount {
                mode: GameMode::Duel,
                count: 3
            })
        );
    }

    #[test]
    fn cursor_should_walk_every_player_once_then_complete() {
        let mut session = named_session(4);
        session.start(shared_round(1, 2, with_image())).unwrap();

        let mut phases = vec![session.phase()];
        while session.phase() != Phase::Complete {
            open(&mut session);
            phases.push(session.advance().unwrap());
        }

        assert_eq!(
            phases,
            vec![
                Phase::Revealing(0),
                Phase::Revealing(1),
                Phase::Revealing(2),
                Phase::Revealing(3),
                Phase::Complete
            ]
        );
    }

    #[test]
    fn advance_should_require_an_opened_card() {
        let mut session = named_session(3);
        session.start(shared_round(1, 0, with_image())).unwrap();

        assert_eq!(session.advance(), Err(SessionError::CardClosed));
        assert_eq!(session.phase(), Phase::Revealing(0));
    }

    #[test]
    fn entering_next_player_should_reset_swipe() {
        let mut session = named_session(3);
        session.start(shared_round(1, 0, with_image())).unwrap();
        open(&mut session);
        assert!(session.swipe().opened());

        session.advance().unwrap();

        assert_eq!(*session.swipe(), SwipeState::default());
        assert_eq!(session.card_view().unwrap().content, CardContent::Covered);
    }

    #[test]
    fn accounting_should_fire_at_most_once_per_image() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, with_image())).unwrap();

        let first = open(&mut session);
        let second = open(&mut session);

        assert_eq!(
            first,
            vec![Deferred::ConfirmDownload {
                ticket: Ticket {
                    round: 1,
                    player: 0,
                    slot: Slot::Shared
                },
                download_location: "https://api.test/download/1".to_string()
            }]
        );
        assert_eq!(second, vec![]);

        session.advance().unwrap();
        assert_eq!(open(&mut session), vec![]);
    }

    #[test]
    fn impostor_reveal_should_not_consume_the_token() {
        let mut session = named_session(3);
        session.start(shared_round(1, 0, with_image())).unwrap();

        assert_eq!(open(&mut session), vec![]);
        assert_eq!(session.card_view().unwrap().content, CardContent::Impostor);

        session.advance().unwrap();
        assert_eq!(open(&mut session).len(), 1);
    }

    #[test]
    fn missing_image_should_request_one_lazy_lookup() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, None)).unwrap();

        let deferred = open(&mut session);
        assert!(matches!(deferred.as_slice(), [Deferred::ResolveImage { .. }]));
        assert_eq!(
            session.card_view().unwrap().content,
            CardContent::Secret {
                term: "Apfel",
                image: None
            }
        );

        session.advance().unwrap();
        assert_eq!(open(&mut session), vec![]);
    }

    #[test]
    fn lazy_image_should_apply_and_chain_accounting() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, None)).unwrap();
        let ticket = open(&mut session)[0].ticket();

        let follow_up = session.apply(DeferredUpdate::Image {
            ticket,
            pick: with_image(),
        });

        assert!(matches!(follow_up.as_slice(), [Deferred::ConfirmDownload { .. }]));
        let CardContent::Secret { image, .. } = session.card_view().unwrap().content else {
            panic!("expected secret");
        };
        assert_eq!(image.unwrap().url, "https://photos.test/1");
    }

    #[test]
    fn late_lazy_image_should_reach_the_next_players() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, None)).unwrap();
        let ticket = open(&mut session)[0].ticket();
        session.advance().unwrap();

        let follow_up = session.apply(DeferredUpdate::Image {
            ticket,
            pick: with_image(),
        });
        assert_eq!(follow_up, vec![]);

        assert_eq!(
            open(&mut session),
            vec![Deferred::ConfirmDownload {
                ticket: Ticket {
                    round: 1,
                    player: 1,
                    slot: Slot::Shared
                },
                download_location: "https://api.test/download/1".to_string()
            }]
        );
        let CardContent::Secret { image, .. } = session.card_view().unwrap().content else {
            panic!("expected secret");
        };
        assert_eq!(image.unwrap().url, "https://photos.test/1");
    }

    #[test]
    fn lazy_image_arriving_while_impostor_looks_should_keep_the_token() {
        let mut session = named_session(3);
        session.start(shared_round(1, 1, None)).unwrap();
        let ticket = open(&mut session)[0].ticket();
        session.advance().unwrap();
        open(&mut session);

        let follow_up = session.apply(DeferredUpdate::Image {
            ticket,
            pick: with_image(),
        });

        assert_eq!(follow_up, vec![]);
        assert_eq!(session.card_view().unwrap().content, CardContent::Impostor);
        session.advance().unwrap();
        assert_eq!(open(&mut session).len(), 1);
    }

    #[test]
    fn image_from_a_previous_round_should_be_dropped() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, None)).unwrap();
        let ticket = open(&mut session)[0].ticket();
        session.reset();
        session.start(shared_round(2, 2, None)).unwrap();

        session.apply(DeferredUpdate::Image {
            ticket,
            pick: with_image(),
        });

        let payload = session.round().unwrap().payload(Slot::Shared).unwrap();
        assert_eq!(payload.image, None);
    }

    #[test]
    fn start_should_reject_an_impostor_outside_the_roster() {
        let mut session = named_session(3);

        let result = session.start(shared_round(1, 7, with_image()));

        assert_eq!(result, Err(SessionError::UnknownPlayer(7)));
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.round().is_none());
    }

    #[test]
    fn start_should_reject_a_round_of_another_mode() {
        let mut session = named_session(3);
        let round = Round::duel(
            1,
            Language::En,
            RoundPayload::new(word("1", "cat"), Language::En, None),
            RoundPayload::new(word("2", "dog"), Language::En, None),
        );

        assert_eq!(
            session.start(round),
            Err(SessionError::RoundMode {
                expected: GameMode::Imposter,
                got: GameMode::Duel
            })
        );
        assert_eq!(session.phase(), Phase::Setup);
    }

    #[test]
    fn start_after_reset_should_begin_with_a_covered_card() {
        let mut session = named_session(3);
        session.start(shared_round(1, 0, with_image())).unwrap();
        open(&mut session);
        session.reset();

        session.start(shared_round(2, 0, with_image())).unwrap();

        assert_eq!(session.phase(), Phase::Revealing(0));
        assert_eq!(*session.swipe(), SwipeState::default());
        assert_eq!(session.card_view().unwrap().content, CardContent::Covered);
    }

    #[test]
    fn stale_update_should_not_touch_the_current_card() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, with_image())).unwrap();
        let ticket = open(&mut session)[0].ticket();
        session.advance().unwrap();

        session.apply(DeferredUpdate::ConfirmedUrl {
            ticket,
            url: "https://photos.test/confirmed".to_string(),
        });

        let image = session.round().unwrap().payload(Slot::Shared).unwrap().image.clone();
        assert_eq!(image.unwrap().url, "https://photos.test/1");
    }

    #[test]
    fn confirmed_url_should_replace_the_displayed_image() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, with_image())).unwrap();
        let ticket = open(&mut session)[0].ticket();

        session.apply(DeferredUpdate::ConfirmedUrl {
            ticket,
            url: "https://photos.test/confirmed".to_string(),
        });

        let CardContent::Secret { image, .. } = session.card_view().unwrap().content else {
            panic!("expected secret");
        };
        assert_eq!(image.unwrap().url, "https://photos.test/confirmed");
    }

    #[test]
    fn update_from_a_previous_round_should_be_dropped() {
        let mut session = named_session(3);
        session.start(shared_round(1, 2, with_image())).unwrap();
        let ticket = open(&mut session)[0].ticket();
        session.reset();
        session.start(shared_round(2, 2, with_image())).unwrap();
        open(&mut session);

        session.apply(DeferredUpdate::ConfirmedUrl {
            ticket,
            url: "https://photos.test/old".to_string(),
        });

        let image = session.round().unwrap().payload(Slot::Shared).unwrap().image.clone();
        assert_eq!(image.unwrap().url, "https://photos.test/1");
    }

    #[test]
    fn duel_reveal_should_show_the_other_players_secret() {
        let mut session = GameSession::new(GameMode::Duel, Language::En, None);
        session.rename_player(0, "Ava").unwrap();
        session.rename_player(1, "Ben").unwrap();
        let round = Round::duel(
            1,
            Language::En,
            RoundPayload::new(word("1", "cat"), Language::En, None),
            RoundPayload::new(word("2", "dog"), Language::En, None),
        );
        session.start(round).unwrap();

        open(&mut session);
        let CardContent::Secret { term, .. } = session.card_view().unwrap().content else {
            panic!("expected secret");
        };
        assert_eq!(term, "dog");

        session.advance().unwrap();
        open(&mut session);
        let CardContent::Secret { term, .. } = session.card_view().unwrap().content else {
            panic!("expected secret");
        };
        assert_eq!(term, "cat");
    }

    #[test]
    fn roster_should_be_locked_outside_setup() {
        let mut session = named_session(3);
        session.start(shared_round(1, 0, with_image())).unwrap();

        assert_eq!(session.rename_player(0, "Eve"), Err(SessionError::NotInSetup));
        assert_eq!(session.set_player_count(4), Err(SessionError::NotInSetup));

        session.reset();
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.players()[0].name, "P0");
        assert!(session.round().is_none());
    }

    #[test]
    fn gesture_outside_a_reveal_should_be_ignored() {
        let mut session = named_session(3);
        session.pointer_down(300.0);
        session.pointer_move(0.0);

        assert_eq!(session.pointer_up(), vec![]);
        assert_eq!(*session.swipe(), SwipeState::default());
    }

    // Infra ----------------------------------------------------------------

    fn open(session: &mut GameSession) -> Vec<Deferred> {
        session.pointer_down(300.0);
        session.pointer_move(0.0);
        session.pointer_up()
    }

    fn named_session(count: usize) -> GameSession {
        let mut session = GameSession::new(GameMode::Imposter, Language::De, None);
        session.set_player_count(count).unwrap();
        for id in 0..count {
            session.rename_player(id, &format!("P{id}")).unwrap();
        }
        session
    }

    fn with_image() -> Option<ImagePick> {
        Some(ImagePick {
            url: "https://photos.test/1".to_string(),
            attribution: None,
            download_location: Some("https://api.test/download/1".to_string()),
        })
    }

    fn shared_round(id: u64, impostor: usize, image: Option<ImagePick>) -> Round {
        let mut apple = word("7", "apple");
        apple.term = "Apfel".to_string();
        Round::shared(id, Language::De, RoundPayload::new(apple, Language::De, image), impostor)
    }

    fn word(id: &str, word_en: &str) -> WordRecord {
        WordRecord {
            id: id.to_string(),
            word_en: word_en.to_string(),
            term: word_en.to_string(),
            lang: None,
            terms: None,
            category: "food".to_string(),
            difficulty: 1.0,
            image_url: None,
        }
    }
}
