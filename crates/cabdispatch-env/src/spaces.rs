use rand::Rng;

use crate::{
    ActionId, EnvConfig,
    state::{Action, State},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed action set: every ordered pair of distinct cities, then the no-op.
pub struct ActionSpace {
    actions: Vec<Action>,
}

impl ActionSpace {
    /// Enumerate pairs in lexicographic order, `(0, 1), (0, 2), ..., (1, 0), ...`,
    /// with `Action::NOOP` last.
    pub fn new(cities: usize) -> Self {
        let mut actions = Vec::with_capacity(cities * cities.saturating_sub(1) + 1);
        for pickup in 0..cities {
            for dropoff in 0..cities {
                if pickup != dropoff {
                    actions.push(Action::new(pickup, dropoff));
                }
            }
        }
        actions.push(Action::NOOP);

        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn get(&self, id: ActionId) -> Option<Action> {
        self.actions.get(id.index()).copied()
    }

    /// Convert an action back into its dense id. Pairs outside the space,
    /// including idle pairs other than `Action::NOOP`, have no id.
    pub fn index_of(&self, action: Action) -> Option<ActionId> {
        self.actions
            .iter()
            .position(|candidate| *candidate == action)
            .map(ActionId::from)
    }

    pub fn noop_id(&self) -> ActionId {
        ActionId::from(self.actions.len() - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross product of cities, hours and days.
///
/// Indexed city-major, then hour, then day, so index `i` maps to
/// `((i / days) / hours, (i / days) % hours, i % days)`.
pub struct StateSpace {
    cities: usize,
    hours: usize,
    days: usize,
}

impl StateSpace {
    pub fn new(cities: usize, hours: usize, days: usize) -> Self {
        Self {
            cities,
            hours,
            days,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.cities, config.hours, config.days)
    }

    pub fn cities(&self) -> usize {
        self.cities
    }

    pub fn hours(&self) -> usize {
        self.hours
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn len(&self) -> usize {
        self.cities * self.hours * self.days
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, state: State) -> bool {
        state.city < self.cities && state.hour < self.hours && state.day < self.days
    }

    pub fn index_of(&self, state: State) -> Option<usize> {
        if !self.contains(state) {
            return None;
        }
        Some((state.city * self.hours + state.hour) * self.days + state.day)
    }

    pub fn get(&self, index: usize) -> Option<State> {
        if index >= self.len() {
            return None;
        }
        let day = index % self.days;
        let rest = index / self.days;
        Some(State::new(rest / self.hours, rest % self.hours, day))
    }

    pub fn iter(&self) -> impl Iterator<Item = State> {
        let space = *self;
        (0..space.len()).filter_map(move |index| space.get(index))
    }

    /// Draw one state uniformly. Returns `None` for an empty space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<State> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.gen_range(0..self.len()))
    }
}
