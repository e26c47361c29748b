//! Stack command - Push values, then pop them all back off.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use acco_core::Stack;

use super::Context;

#[derive(Args)]
pub struct StackArgs {
    /// Values to push, bottom first
    values: Vec<String>,
}

#[derive(Serialize)]
struct StackReport {
    count: usize,
    peek: Option<String>,
    popped: Vec<String>,
}

pub fn execute(args: StackArgs, ctx: &Context) -> Result<()> {
    let mut stack = Stack::new();
    for value in args.values {
        stack.push(value);
    }

    let count = stack.count();
    let peek = stack.peek().cloned();

    let mut popped = Vec::with_capacity(count);
    while let Some(value) = stack.pop() {
        popped.push(value);
    }

    let lines = vec![
        format!("count: {}", count),
        format!("peek:  {}", peek.as_deref().unwrap_or("(empty)")),
        format!("pops:  {}", popped.join(" ")),
    ];
    ctx.emit(&StackReport { count, peek, popped }, &lines)
}
