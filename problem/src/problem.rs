//! The problem value: an error, its severity and the trail it left on the way up.
//!
//! Every operation consumes the problem and hands back a new one, so a problem
//! is never changed behind the back of whoever holds it.
//!
//! The stack reads most recent first. The entry recorded when the problem was
//! created is always the last one.

use std::fmt;
use std::iter::{FusedIterator, Rev};
use std::mem;
use std::slice;

use crate::config::RenderConfig;
use crate::render;
use crate::severity::Severity;

/// One recorded step in a problem's stack.
#[derive(Debug, PartialEq, Eq)]
pub enum StackEntry<'a, E> {
    /// A note about where or why the error passed through.
    Context(&'a str),
    /// A defect that was recorded.
    Defect(&'a E),
    /// A failure that was recorded.
    Failure(&'a E),
}

impl<'a, E> StackEntry<'a, E> {
    fn occurrence(severity: Severity, error: &'a E) -> Self {
        match severity {
            Severity::Defect => StackEntry::Defect(error),
            Severity::Failure => StackEntry::Failure(error),
        }
    }

    /// Kind label used when rendering: `Context`, `Defect` or `Failure`.
    pub fn label(&self) -> &'static str {
        match self {
            StackEntry::Context(_) => "Context",
            StackEntry::Defect(_) => Severity::Defect.label(),
            StackEntry::Failure(_) => Severity::Failure.label(),
        }
    }

    /// Severity of a recorded defect or failure, `None` for context.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            StackEntry::Context(_) => None,
            StackEntry::Defect(_) => Some(Severity::Defect),
            StackEntry::Failure(_) => Some(Severity::Failure),
        }
    }

    pub fn context(&self) -> Option<&'a str> {
        match *self {
            StackEntry::Context(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'a E> {
        match *self {
            StackEntry::Context(_) => None,
            StackEntry::Defect(error) | StackEntry::Failure(error) => Some(error),
        }
    }
}

impl<E> Clone for StackEntry<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for StackEntry<'_, E> {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Frame<E> {
    Context(String),
    Recorded(Severity, E),
    /// Slot of the effective error, which is held in `Problem::error`.
    Current(Severity),
}

/// An error together with its severity and stack.
#[derive(Clone, PartialEq, Eq)]
pub struct Problem<E> {
    error: E,
    severity: Severity,
    /// Oldest first. Never empty.
    frames: Vec<Frame<E>>,
    /// Index of the `Frame::Current` slot.
    current: usize,
}

impl<E> Problem<E> {
    pub fn new(severity: Severity, error: E) -> Self {
        Self {
            error,
            severity,
            frames: vec![Frame::Current(severity)],
            current: 0,
        }
    }

    /// Create a problem for an unexpected, internal error.
    pub fn defect(error: E) -> Self {
        Self::new(Severity::Defect, error)
    }

    /// Create a problem for an expected error that users may see.
    pub fn failure(error: E) -> Self {
        Self::new(Severity::Failure, error)
    }

    /// The effective error.
    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_defect(&self) -> bool {
        self.severity.is_defect()
    }

    pub fn is_failure(&self) -> bool {
        self.severity.is_failure()
    }

    /// Walk the stack, most recent entry first.
    pub fn stack(&self) -> Stack<'_, E> {
        Stack {
            frames: self.frames.iter().rev(),
            error: &self.error,
        }
    }

    /// Number of entries in the stack. Always at least one.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The most recently recorded entry.
    pub fn head(&self) -> StackEntry<'_, E> {
        self.stack()
            .next()
            .unwrap_or(StackEntry::occurrence(self.severity, &self.error))
    }

    /// Context notes, most recent first.
    pub fn contexts(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames.iter().rev().filter_map(|frame| match frame {
            Frame::Context(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Note where the error passed through. Severity and error are unchanged.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.frames.push(Frame::Context(context.into()));
        self
    }

    /// Like [`Problem::with_context`], building the note with a closure.
    pub fn with_context_lazy<C, F>(self, context: F) -> Self
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.with_context(context())
    }

    /// Record a defect.
    ///
    /// A failure becomes a defect carrying `error`. An existing defect keeps
    /// its error and only records the new one in the stack.
    pub fn with_defect(mut self, error: E) -> Self {
        match self.severity {
            Severity::Defect => self.frames.push(Frame::Recorded(Severity::Defect, error)),
            Severity::Failure => self.supersede(Severity::Defect, error),
        }
        self
    }

    /// Record a failure.
    ///
    /// A defect stays a defect and only records the failure in the stack.
    /// A failure takes `error` as its effective error.
    pub fn with_failure(mut self, error: E) -> Self {
        match self.severity {
            Severity::Defect => self.frames.push(Frame::Recorded(Severity::Failure, error)),
            Severity::Failure => self.supersede(Severity::Failure, error),
        }
        self
    }

    /// Reclassify as a defect without recording anything.
    pub fn to_defect(mut self) -> Self {
        self.severity = Severity::Defect;
        self
    }

    /// Reclassify as a failure without recording anything.
    pub fn to_failure(mut self) -> Self {
        self.severity = Severity::Failure;
        self
    }

    /// Drop severity and stack, keeping only the effective error.
    pub fn into_error(self) -> E {
        self.error
    }

    /// The error if this is a failure, otherwise `default`.
    ///
    /// This never hands out a defect's error, which makes it the way to get
    /// something to show to a user.
    pub fn unwrap_failure(self, default: E) -> E {
        self.unwrap_failure_or_else(|| default)
    }

    pub fn unwrap_failure_or_else<F>(self, default: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self.severity {
            Severity::Failure => self.error,
            Severity::Defect => default(),
        }
    }

    /// The error if this is a failure.
    pub fn as_failure(&self) -> Option<&E> {
        match self.severity {
            Severity::Failure => Some(&self.error),
            Severity::Defect => None,
        }
    }

    /// Convert every error held by the problem, keeping severity and stack order.
    pub fn map_error<F, M>(self, mut map: M) -> Problem<F>
    where
        M: FnMut(E) -> F,
    {
        let frames = self
            .frames
            .into_iter()
            .map(|frame| match frame {
                Frame::Context(text) => Frame::Context(text),
                Frame::Recorded(severity, error) => Frame::Recorded(severity, map(error)),
                Frame::Current(severity) => Frame::Current(severity),
            })
            .collect();

        Problem {
            error: map(self.error),
            severity: self.severity,
            frames,
            current: self.current,
        }
    }

    /// Multi-line rendering. See [`render::pretty_print`].
    pub fn pretty_print<F>(&self, to_string: F) -> String
    where
        F: Fn(&E) -> String,
    {
        render::pretty_print(self, to_string)
    }

    pub fn pretty_print_with<F>(&self, config: &RenderConfig, to_string: F) -> String
    where
        F: Fn(&E) -> String,
    {
        render::pretty_print_with(self, config, to_string)
    }

    /// Single-line rendering. See [`render::print_line`].
    pub fn print_line<F>(&self, to_string: F) -> String
    where
        F: Fn(&E) -> String,
    {
        render::print_line(self, to_string)
    }

    pub fn print_line_with<F>(&self, config: &RenderConfig, to_string: F) -> String
    where
        F: Fn(&E) -> String,
    {
        render::print_line_with(self, config, to_string)
    }

    /// Text that is safe to show a user: the failure message, or `fallback`
    /// for a defect.
    pub fn render_user<F>(&self, fallback: &str, to_string: F) -> String
    where
        F: Fn(&E) -> String,
    {
        self.as_failure()
            .map_or_else(|| fallback.to_string(), to_string)
    }

    /// Move the effective error into the stack and make `error` the new one.
    fn supersede(&mut self, severity: Severity, error: E) {
        let previous = mem::replace(&mut self.error, error);
        if let Some(slot) = self.frames.get_mut(self.current) {
            if let Frame::Current(recorded) = *slot {
                *slot = Frame::Recorded(recorded, previous);
            }
        }
        self.current = self.frames.len();
        self.frames.push(Frame::Current(severity));
        self.severity = severity;
    }
}

impl<E: fmt::Debug> fmt::Debug for Problem<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("severity", &self.severity)
            .field("error", &self.error)
            .field("stack", &self.stack().collect::<Vec<_>>())
            .finish()
    }
}

/// `{}` gives the single-line rendering, `{:#}` the multi-line one.
impl<E: fmt::Display> fmt::Display for Problem<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = RenderConfig::default();
        let to_string = |error: &E| error.to_string();
        if f.alternate() {
            render::write_pretty(f, self, &config, &to_string)
        } else {
            render::write_line(f, self, &config, &to_string)
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Problem<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Iterator over a problem's stack, most recent entry first.
pub struct Stack<'a, E> {
    frames: Rev<slice::Iter<'a, Frame<E>>>,
    error: &'a E,
}

impl<'a, E> Stack<'a, E> {
    fn entry(&self, frame: &'a Frame<E>) -> StackEntry<'a, E> {
        match frame {
            Frame::Context(text) => StackEntry::Context(text),
            Frame::Recorded(severity, error) => StackEntry::occurrence(*severity, error),
            Frame::Current(severity) => StackEntry::occurrence(*severity, self.error),
        }
    }
}

impl<'a, E> Iterator for Stack<'a, E> {
    type Item = StackEntry<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next()?;
        Some(self.entry(frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl<E> DoubleEndedIterator for Stack<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let frame = self.frames.next_back()?;
        Some(self.entry(frame))
    }
}

impl<E> ExactSizeIterator for Stack<'_, E> {}

impl<E> FusedIterator for Stack<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries<'a>(problem: &'a Problem<&'static str>) -> Vec<StackEntry<'a, &'static str>> {
        problem.stack().collect()
    }

    #[test]
    fn new_problem_has_single_originating_entry() {
        let defect = Problem::defect("d");
        assert_eq!(defect.severity(), Severity::Defect);
        assert_eq!(entries(&defect), vec![StackEntry::Defect(&"d")]);

        let failure = Problem::failure("f");
        assert_eq!(failure.severity(), Severity::Failure);
        assert_eq!(entries(&failure), vec![StackEntry::Failure(&"f")]);
    }

    #[test]
    fn context_is_most_recent_first_and_keeps_severity() {
        let problem = Problem::defect("e").with_context("c1").with_context("c2");

        assert_eq!(problem.depth(), 3);
        assert_eq!(problem.severity(), Severity::Defect);
        assert_eq!(*problem.error(), "e");
        assert_eq!(
            entries(&problem),
            vec![
                StackEntry::Context("c2"),
                StackEntry::Context("c1"),
                StackEntry::Defect(&"e"),
            ]
        );
        assert_eq!(problem.contexts().collect::<Vec<_>>(), vec!["c2", "c1"]);
        assert_eq!(problem.head(), StackEntry::Context("c2"));
    }

    #[test]
    fn lazy_context_is_recorded() {
        let id = 7;
        let problem = Problem::failure("f").with_context_lazy(|| format!("loading {id}"));
        assert_eq!(problem.head().context(), Some("loading 7"));
    }

    #[test]
    fn defect_survives_later_failure() {
        let problem = Problem::defect("d").with_failure("f");

        assert_eq!(problem.severity(), Severity::Defect);
        assert_eq!(*problem.error(), "d");
        assert_eq!(
            entries(&problem),
            vec![StackEntry::Failure(&"f"), StackEntry::Defect(&"d")]
        );
    }

    #[test]
    fn first_defect_is_retained() {
        let problem = Problem::defect("d1").with_defect("d2");

        assert_eq!(problem.severity(), Severity::Defect);
        assert_eq!(*problem.error(), "d1");
        assert_eq!(
            entries(&problem),
            vec![StackEntry::Defect(&"d2"), StackEntry::Defect(&"d1")]
        );
    }

    #[test]
    fn defect_replaces_failure() {
        let problem = Problem::failure("f").with_context("c").with_defect("d");

        assert_eq!(problem.severity(), Severity::Defect);
        assert_eq!(*problem.error(), "d");
        assert_eq!(
            entries(&problem),
            vec![
                StackEntry::Defect(&"d"),
                StackEntry::Context("c"),
                StackEntry::Failure(&"f"),
            ]
        );
    }

    #[test]
    fn later_failure_replaces_failure() {
        let problem = Problem::failure("f1").with_failure("f2");

        assert_eq!(problem.severity(), Severity::Failure);
        assert_eq!(*problem.error(), "f2");
        assert_eq!(
            entries(&problem),
            vec![StackEntry::Failure(&"f2"), StackEntry::Failure(&"f1")]
        );
    }

    #[test]
    fn superseded_errors_stay_in_place() {
        let problem = Problem::failure("f1")
            .with_failure("f2")
            .with_context("c")
            .with_defect("d")
            .with_defect("d2");

        assert_eq!(*problem.error(), "d");
        assert_eq!(
            entries(&problem),
            vec![
                StackEntry::Defect(&"d2"),
                StackEntry::Defect(&"d"),
                StackEntry::Context("c"),
                StackEntry::Failure(&"f2"),
                StackEntry::Failure(&"f1"),
            ]
        );
    }

    #[test]
    fn forced_coercion_round_trips_without_touching_stack() {
        let problem = Problem::failure("f1").to_defect();
        assert!(problem.is_defect());
        assert_eq!(problem.depth(), 1);

        let problem = problem.to_failure();
        assert!(problem.is_failure());
        assert_eq!(*problem.error(), "f1");
        assert_eq!(entries(&problem), vec![StackEntry::Failure(&"f1")]);
    }

    #[test]
    fn coerced_defect_is_sticky_for_later_failures() {
        let problem = Problem::failure("f1").to_defect().with_failure("f2");

        assert!(problem.is_defect());
        assert_eq!(*problem.error(), "f1");
        assert_eq!(
            entries(&problem),
            vec![StackEntry::Failure(&"f2"), StackEntry::Failure(&"f1")]
        );
    }

    #[test]
    fn unwrap_failure_hides_defects() {
        assert_eq!(Problem::defect("d").unwrap_failure("fallback"), "fallback");
        assert_eq!(Problem::failure("f").unwrap_failure("fallback"), "f");
        assert_eq!(
            Problem::failure("f")
                .with_defect("d")
                .unwrap_failure_or_else(|| "hidden"),
            "hidden"
        );
    }

    #[test]
    fn failure_accessor_matches_severity() {
        assert_eq!(Problem::failure("f").as_failure(), Some(&"f"));
        assert_eq!(Problem::defect("d").as_failure(), None);
    }

    #[test]
    fn into_error_ignores_context() {
        let problem = Problem::defect("e").with_context("a").with_context("b");
        assert_eq!(problem.into_error(), "e");
    }

    #[test]
    fn map_error_converts_every_recorded_error() {
        let problem = Problem::failure("f")
            .with_context("c")
            .with_defect("d")
            .with_failure("late")
            .map_error(str::len);

        assert_eq!(problem.severity(), Severity::Defect);
        assert_eq!(*problem.error(), 1);
        assert_eq!(
            problem.stack().collect::<Vec<_>>(),
            vec![
                StackEntry::Failure(&4),
                StackEntry::Defect(&1),
                StackEntry::Context("c"),
                StackEntry::Failure(&1),
            ]
        );
    }

    #[test]
    fn stack_iterates_from_both_ends() {
        let problem = Problem::defect("e").with_context("c1").with_context("c2");
        let mut stack = problem.stack();

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.next_back(), Some(StackEntry::Defect(&"e")));
        assert_eq!(stack.next(), Some(StackEntry::Context("c2")));
        assert_eq!(stack.next(), Some(StackEntry::Context("c1")));
        assert_eq!(stack.next(), None);
    }

    #[test]
    fn entry_accessors() {
        let context: StackEntry<'_, u8> = StackEntry::Context("here");
        assert_eq!(context.label(), "Context");
        assert_eq!(context.severity(), None);
        assert_eq!(context.context(), Some("here"));
        assert_eq!(context.error(), None);

        let failure = StackEntry::Failure(&3u8);
        assert_eq!(failure.label(), "Failure");
        assert_eq!(failure.severity(), Some(Severity::Failure));
        assert_eq!(failure.error(), Some(&3));
    }

    #[test]
    fn problem_is_a_std_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let problem = Problem::failure(io).with_context("reading config");

        let source = std::error::Error::source(&problem).expect("source should be set");
        assert_eq!(source.to_string(), "missing");
        assert_eq!(
            problem.to_string(),
            "Failure: missing | Context: reading config | Failure: missing"
        );
    }
}
