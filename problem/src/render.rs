//! Text renderings of a problem.
//!
//! Both renderings start with `<Severity>: <message>`, where the message is the
//! effective error passed through the caller's `to_string`. Stack entries follow
//! in stack order, most recent first, each as `<Kind>: <text>`.
//!
//! ```text
//! Failure: Invalid email
//!
//! stack:
//!   Context: in validate_email
//!   Failure: Invalid email
//! ```
//!
//! The single-line form of the same problem:
//!
//! ```text
//! Failure: Invalid email | Context: in validate_email | Failure: Invalid email
//! ```

use std::fmt::{self, Write};

use crate::config::RenderConfig;
use crate::problem::{Problem, StackEntry};

/// Multi-line rendering with the default [`RenderConfig`].
pub fn pretty_print<E, F>(problem: &Problem<E>, to_string: F) -> String
where
    F: Fn(&E) -> String,
{
    pretty_print_with(problem, &RenderConfig::default(), to_string)
}

pub fn pretty_print_with<E, F>(problem: &Problem<E>, config: &RenderConfig, to_string: F) -> String
where
    F: Fn(&E) -> String,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_pretty(&mut out, problem, config, &to_string);
    out
}

/// Single-line rendering with the default [`RenderConfig`], for logs.
pub fn print_line<E, F>(problem: &Problem<E>, to_string: F) -> String
where
    F: Fn(&E) -> String,
{
    print_line_with(problem, &RenderConfig::default(), to_string)
}

pub fn print_line_with<E, F>(problem: &Problem<E>, config: &RenderConfig, to_string: F) -> String
where
    F: Fn(&E) -> String,
{
    let mut out = String::new();
    let _ = write_line(&mut out, problem, config, &to_string);
    out
}

pub(crate) fn write_pretty<E, W>(
    out: &mut W,
    problem: &Problem<E>,
    config: &RenderConfig,
    to_string: &dyn Fn(&E) -> String,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    write_summary(out, problem, to_string)?;
    write!(out, "\n\n{}", config.stack_header)?;
    for entry in problem.stack() {
        write!(out, "\n{}", config.indent)?;
        write_entry(out, entry, to_string)?;
    }
    Ok(())
}

pub(crate) fn write_line<E, W>(
    out: &mut W,
    problem: &Problem<E>,
    config: &RenderConfig,
    to_string: &dyn Fn(&E) -> String,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    write_summary(out, problem, to_string)?;
    for entry in problem.stack() {
        out.write_str(&config.separator)?;
        write_entry(out, entry, to_string)?;
    }
    Ok(())
}

fn write_summary<E, W>(
    out: &mut W,
    problem: &Problem<E>,
    to_string: &dyn Fn(&E) -> String,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    write!(
        out,
        "{}: {}",
        problem.severity().label(),
        to_string(problem.error())
    )
}

fn write_entry<E, W>(
    out: &mut W,
    entry: StackEntry<'_, E>,
    to_string: &dyn Fn(&E) -> String,
) -> fmt::Result
where
    W: Write + ?Sized,
{
    match entry {
        StackEntry::Context(text) => write!(out, "{}: {}", entry.label(), text),
        StackEntry::Defect(error) | StackEntry::Failure(error) => {
            write!(out, "{}: {}", entry.label(), to_string(error))
        }
    }
}
