use crate::error::CalendarError;
use crate::model::Roster;

/// Un mois n'a jamais plus de 31 jours à servir.
pub const MAX_DRAWS_PER_MONTH: usize = 31;

/// Position courante dans le roster (index modulo la longueur).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterCursor {
    index: usize,
}

impl RosterCursor {
    /// Curseur de départ : successeur du dernier nom utilisé le mois précédent.
    ///
    /// Un nom vide équivaut à l'absence de nom ; un nom absent du roster est fatal.
    pub fn start(roster: &Roster, last_name: Option<&str>) -> Result<Self, CalendarError> {
        let last_name = last_name.map(str::trim).filter(|n| !n.is_empty());
        let index = match last_name {
            None => 0,
            Some(name) => {
                let pos = roster
                    .position(name)
                    .ok_or_else(|| CalendarError::UnknownName(name.to_string()))?;
                (pos + 1) % roster.len()
            }
        };
        Ok(Self { index })
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Renvoie le nom courant et le curseur suivant.
    pub fn next(self, roster: &Roster) -> (&str, RosterCursor) {
        let len = roster.len();
        let index = self.index % len;
        let following = Self {
            index: (index + 1) % len,
        };
        (roster.name_at(index), following)
    }
}

/// Tirage borné de noms à partir d'un curseur.
#[derive(Debug, Clone)]
pub struct Rotation<'r> {
    roster: &'r Roster,
    cursor: RosterCursor,
    drawn: usize,
    limit: usize,
}

impl<'r> Rotation<'r> {
    pub fn new(roster: &'r Roster, cursor: RosterCursor, limit: usize) -> Self {
        Self {
            roster,
            cursor,
            drawn: 0,
            limit,
        }
    }

    /// Nombre de noms déjà tirés.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Curseur à utiliser pour le prochain tirage.
    pub fn cursor(&self) -> RosterCursor {
        self.cursor
    }
}

impl<'r> Iterator for Rotation<'r> {
    type Item = &'r str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.drawn >= self.limit {
            return None;
        }
        let (name, following) = self.cursor.next(self.roster);
        self.cursor = following;
        self.drawn += 1;
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.limit.saturating_sub(self.drawn);
        (left, Some(left))
    }
}
