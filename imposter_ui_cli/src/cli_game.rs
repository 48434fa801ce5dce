use std::{str::FromStr, sync::Arc};

use imposter_core::{
    swipe::MAX, CardContent, CardView, Deferred, DeferredUpdate, GameSession, ImagePick,
    ImageResolver, IndexPicker, Phase, PhotoProvider, RoundComposer,
};
use itertools::Itertools;
use log::debug;
use tokio::{
    io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader},
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
};

use crate::cli_action::CliAction;

static RULES: &str = "
*** Imposter ***
Everybody gets the same secret word except the impostor, who only learns that they are the impostor.
Pass the device around. On your turn, swipe the cover up to peek at your card, then hand the device on.
Once everyone has looked, talk about the word without saying it and find out who the impostor is.
In duel mode there are two players and each one sees the word the other has to guess.";

pub struct CliGame<P> {
    session: GameSession,
    composer: RoundComposer,
    images: Arc<ImageResolver>,
    provider: Arc<dyn PhotoProvider>,
    picker: P,
    utm_source: String,
    updates_tx: UnboundedSender<DeferredUpdate>,
    updates_rx: UnboundedReceiver<DeferredUpdate>,
}

impl<P: IndexPicker> CliGame<P> {
    pub fn new(
        session: GameSession,
        composer: RoundComposer,
        provider: Arc<dyn PhotoProvider>,
        picker: P,
        utm_source: String,
    ) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        CliGame {
            images: composer.images(),
            session,
            composer,
            provider,
            picker,
            utm_source,
            updates_tx,
            updates_rx,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(io::stdin()).lines();
        self.render().await?;
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        return Ok(());
                    };
                    match CliAction::from_str(&line) {
                        Ok(CliAction::Quit) => return Ok(()),
                        Ok(action) => self.perform(action).await,
                        Err(_) => println!("unknown command: {}", line.trim()),
                    }
                    self.render().await?;
                }
                Some(update) = self.updates_rx.recv() => {
                    let refresh = matches!(update, DeferredUpdate::Image { .. });
                    let follow_up = self.session.apply(update);
                    self.spawn_all(follow_up);
                    if refresh {
                        self.render().await?;
                    }
                }
            }
        }
    }

    async fn perform(&mut self, action: CliAction) {
        let result = match action {
            CliAction::Quit => Ok(()),
            CliAction::Help => {
                println!("{RULES}");
                Ok(())
            }
            CliAction::Count(n) => self.session.set_player_count(n),
            CliAction::Name(id, name) => self.session.rename_player(id, &name),
            CliAction::Lang(lang) => self.session.set_language(lang),
            CliAction::Category(category) => self.session.set_category(category),
            CliAction::Start => {
                self.session
                    .start_round(&self.composer, &mut self.picker)
                    .await
            }
            CliAction::Drag(px) => {
                self.drag(px);
                Ok(())
            }
            CliAction::Open => {
                self.drag(MAX);
                Ok(())
            }
            CliAction::Next => self.session.advance().map(|_| ()),
            CliAction::NewRound => {
                self.session
                    .new_round(&self.composer, &mut self.picker)
                    .await
            }
            CliAction::Reset => {
                self.session.reset();
                Ok(())
            }
        };
        if let Err(e) = result {
            println!("{e}");
        }
    }

    /// Simulates a finger dragging the cover up by `px` pixels and letting go.
    fn drag(&mut self, px: f32) {
        self.session.pointer_down(MAX);
        self.session.pointer_move(MAX - px);
        let deferred = self.session.pointer_up();
        self.spawn_all(deferred);
    }

    fn spawn_all(&self, deferred: Vec<Deferred>) {
        for work in deferred {
            debug!("running {:?} detached", work.ticket());
            let images = self.images.clone();
            let provider = self.provider.clone();
            let tx = self.updates_tx.clone();
            tokio::spawn(async move {
                if let Some(update) = work.run(&images, provider.as_ref()).await {
                    // the game may have quit meanwhile
                    let _ = tx.send(update);
                }
            });
        }
    }

    async fn render(&self) -> anyhow::Result<()> {
        match self.session.phase() {
            Phase::Setup => println!("\n{}", self.format_setup()),
            Phase::Revealing(_) => {
                if let Some(view) = self.session.card_view() {
                    println!("\n{}", format_card(&view, &self.utm_source));
                }
            }
            Phase::Complete => println!(
                "\nEveryone has seen their card. Discuss!\n{}",
                self.session.mode().describe()
            ),
        }
        for action in CliAction::available(self.session.phase()) {
            println!("- [{}]: {}", action.cmd_str(), action.info());
        }
        let mut stdout = io::stdout();
        stdout.write_all(b">").await?;
        stdout.flush().await?;
        Ok(())
    }

    fn format_setup(&self) -> String {
        let players = self
            .session
            .players()
            .iter()
            .map(|p| {
                let name = if p.has_name() { p.name.as_str() } else { "?" };
                format!("\t{}: {}", p.id + 1, name)
            })
            .join("\n");
        let category = self
            .session
            .category()
            .map(|c| c.label())
            .unwrap_or("any");
        format!(
            "Setup ({})\nLanguage: {}\nCategory: {}\nPlayers:\n{}",
            self.session.mode().describe(),
            self.session.lang().label(),
            category,
            players
        )
    }
}

fn format_card(view: &CardView, utm_source: &str) -> String {
    let header = format!("Card for {}", view.player.name);
    match view.content {
        CardContent::Covered => format!("{header}\n[{}] swipe up", progress_bar(view.progress)),
        CardContent::Impostor => format!("{header}\nYou are the IMPOSTER. Blend in!"),
        CardContent::Secret { term, image } => {
            format!("{header}\nYour word: {term}\n{}", format_image(image, utm_source))
        }
    }
}

fn format_image(image: Option<&ImagePick>, utm_source: &str) -> String {
    let Some(image) = image else {
        return "(no photo, placeholder)".to_string();
    };
    match image.credit(utm_source) {
        Some(c) => format!(
            "{}\nPhoto by {} ({}) on Unsplash ({})",
            image.url, c.author, c.author_url, c.photo_url
        ),
        None => image.url.clone(),
    }
}

fn progress_bar(percent: f32) -> String {
    let filled = (percent / 5.0).round() as usize;
    format!("{:<20}", "#".repeat(filled.min(20)))
}
