use std::str::FromStr;

use imposter_core::{Category, Language, Phase, PlayerId};

#[derive(Debug, PartialEq)]
pub enum CliAction {
    Quit,
    Help,
    Count(usize),
    /// Zero-based seat, entered one-based.
    Name(PlayerId, String),
    Lang(Language),
    Category(Option<Category>),
    Start,
    Drag(f32),
    Open,
    Next,
    NewRound,
    Reset,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseActionError;

impl CliAction {
    pub fn available(phase: Phase) -> Vec<CliAction> {
        let mut actions = vec![CliAction::Quit, CliAction::Help];
        match phase {
            Phase::Setup => actions.extend([
                CliAction::Count(5),
                CliAction::Name(0, "Ava".to_string()),
                CliAction::Lang(Language::default()),
                CliAction::Category(None),
                CliAction::Start,
            ]),
            Phase::Revealing(_) => {
                actions.extend([CliAction::Drag(120.0), CliAction::Open, CliAction::Next])
            }
            Phase::Complete => actions.extend([CliAction::NewRound, CliAction::Reset]),
        }
        actions
    }

    pub fn info(&self) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Help => "display rules".to_string(),
            CliAction::Count(_) => "set the number of players".to_string(),
            CliAction::Name(_, _) => "name a player".to_string(),
            CliAction::Lang(_) => format!("choose the word language: {}", Language::options()),
            CliAction::Category(_) => "choose a category slug, or any".to_string(),
            CliAction::Start => "start the round".to_string(),
            CliAction::Drag(_) => "swipe the cover up by that many pixels".to_string(),
            CliAction::Open => "swipe the cover all the way up".to_string(),
            CliAction::Next => "hand the device to the next player".to_string(),
            CliAction::NewRound => "new word, same players".to_string(),
            CliAction::Reset => "back to setup".to_string(),
        }
    }

    pub fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Help => "h".to_string(),
            CliAction::Count(n) => format!("c {n}"),
            CliAction::Name(id, name) => format!("p {} {name}", id + 1),
            CliAction::Lang(lang) => format!("l {lang}"),
            CliAction::Category(Some(c)) => format!("k {c}"),
            CliAction::Category(None) => "k any".to_string(),
            CliAction::Start => "s".to_string(),
            CliAction::Drag(px) => format!("d {px}"),
            CliAction::Open => "o".to_string(),
            CliAction::Next => "n".to_string(),
            CliAction::NewRound => "w".to_string(),
            CliAction::Reset => "r".to_string(),
        }
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (cmd, rest) = s.split_once(' ').unwrap_or((s, ""));
        let rest = rest.trim();
        match (cmd, rest) {
            ("q", "") => Ok(CliAction::Quit),
            ("h", "") => Ok(CliAction::Help),
            ("s", "") => Ok(CliAction::Start),
            ("o", "") => Ok(CliAction::Open),
            ("n", "") => Ok(CliAction::Next),
            ("w", "") => Ok(CliAction::NewRound),
            ("r", "") => Ok(CliAction::Reset),
            ("c", n) => n.parse().map(CliAction::Count).map_err(|_| ParseActionError),
            ("d", px) => px.parse().map(CliAction::Drag).map_err(|_| ParseActionError),
            ("l", code) => Language::from_str(code)
                .map(CliAction::Lang)
                .map_err(|_| ParseActionError),
            ("k", "any") => Ok(CliAction::Category(None)),
            ("k", slug) => Category::from_slug(Some(slug))
                .map(CliAction::Category)
                .map_err(|_| ParseActionError),
            ("p", args) => {
                let (seat, name) = args.split_once(' ').ok_or(ParseActionError)?;
                match usize::from_str(seat) {
                    Ok(seat) if seat > 0 && !name.trim().is_empty() => {
                        Ok(CliAction::Name(seat - 1, name.trim().to_string()))
                    }
                    _ => Err(ParseActionError),
                }
            }
            _ => Err(ParseActionError),
        }
    }
}
