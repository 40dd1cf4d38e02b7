//! Ordered decision lists mapping detector signals to a time class.
//!
//! Each analyzer owns one [`DecisionList`]. Rules are evaluated top to
//! bottom and the first predicate that holds wins; the fallback fires when
//! nothing else does. Keeping the table as data makes the priority order
//! readable in one place and lets tests target a single rule.

use logiccraft_types::BigO;

/// What a rule does to the space class computed by the space heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceEffect {
    /// Keep whatever the space heuristics decided.
    Keep,
    /// Replace it.
    Override(BigO),
}

impl SpaceEffect {
    pub fn apply(self, space: BigO) -> BigO {
        match self {
            SpaceEffect::Keep => space,
            SpaceEffect::Override(class) => class,
        }
    }
}

/// One `(predicate -> result)` entry.
pub struct Rule<S: 'static> {
    pub name: &'static str,
    pub applies: fn(&S) -> bool,
    pub time: BigO,
    pub space: SpaceEffect,
}

impl<S: 'static> Rule<S> {
    pub const fn new(name: &'static str, applies: fn(&S) -> bool, time: BigO) -> Self {
        Self {
            name,
            applies,
            time,
            space: SpaceEffect::Keep,
        }
    }

    pub const fn with_space(mut self, space: SpaceEffect) -> Self {
        self.space = space;
        self
    }
}

impl<S: 'static> std::fmt::Debug for Rule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("time", &self.time)
            .field("space", &self.space)
            .finish()
    }
}

/// First-match-wins rule table with a guaranteed fallback.
#[derive(Debug)]
pub struct DecisionList<S: 'static> {
    pub rules: &'static [Rule<S>],
    pub fallback: Rule<S>,
}

impl<S: 'static> DecisionList<S> {
    /// The first rule whose predicate holds, or the fallback.
    pub fn classify(&self, signals: &S) -> &Rule<S> {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(signals))
            .unwrap_or(&self.fallback)
    }

    /// Rule names in evaluation order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|rule| rule.name)
            .chain(std::iter::once(self.fallback.name))
            .collect()
    }
}

fn always<S>(_: &S) -> bool {
    true
}

/// Fallback rule used by both analyzers.
pub const fn constant_fallback<S: 'static>() -> Rule<S> {
    Rule::new("constant", always::<S>, BigO::Constant)
}
