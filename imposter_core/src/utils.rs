use crate::player::Player;

pub trait RosterExtensions {
    fn resize_keeping_names(&mut self, count: usize);
    fn unnamed_seats(&self) -> Vec<usize>;
}

impl RosterExtensions for Vec<Player> {
    fn resize_keeping_names(&mut self, count: usize) {
        self.truncate(count);
        let len = self.len();
        self.extend((len..count).map(Player::new));
    }

    fn unnamed_seats(&self) -> Vec<usize> {
        self.iter()
            .filter(|p| !p.has_name())
            .map(|p| p.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{player::Player, utils::RosterExtensions};

    #[test]
    fn resize_keeping_names_should_keep_surviving_seats() {
        let mut roster = vec![named(0, "Ava"), named(1, "Ben"), named(2, "Cem")];

        roster.resize_keeping_names(2);
        assert_eq!(roster, vec![named(0, "Ava"), named(1, "Ben")]);

        roster.resize_keeping_names(4);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[1].name, "Ben");
        assert_eq!(roster[3], Player::new(3));
    }

    #[test]
    fn unnamed_seats_should_treat_whitespace_as_missing() {
        let roster = vec![named(0, "Ava"), named(1, "  "), Player::new(2)];
        assert_eq!(roster.unnamed_seats(), vec![1, 2]);
    }

    // Infra ----------------------------------------------------------------

    fn named(id: usize, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
        }
    }
}
