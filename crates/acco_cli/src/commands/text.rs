//! Text commands - Histogram, word count, name inversion and word reversal.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use acco_core::{char_histogram, invert_name, render_histogram, reverse_words, word_count};

use super::Context;

#[derive(Args)]
pub struct TextArgs {
    /// Input text (quote it to keep spaces)
    pub text: String,
}

pub fn histogram(args: TextArgs, ctx: &Context) -> Result<()> {
    let entries = char_histogram(&args.text);
    let lines = render_histogram(&entries, ctx.config.histogram_bar);
    ctx.emit(&entries, &lines)
}

pub fn words(args: TextArgs, ctx: &Context) -> Result<()> {
    let count = word_count(&args.text);
    ctx.emit(&json!({ "words": count }), &[count.to_string()])
}

pub fn invert(args: TextArgs, ctx: &Context) -> Result<()> {
    let inverted = invert_name(&args.text)?;
    ctx.emit(&json!({ "name": inverted }), &[inverted.clone()])
}

pub fn reverse(args: TextArgs, ctx: &Context) -> Result<()> {
    let reversed = reverse_words(&args.text);
    ctx.emit(&json!({ "text": reversed }), &[reversed.clone()])
}
