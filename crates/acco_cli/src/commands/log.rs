//! Log command - Write a line through the shared logger.

use anyhow::Result;

use acco_core::Logger;

use super::text::TextArgs;
use super::Context;

pub fn execute(args: TextArgs, ctx: &Context) -> Result<()> {
    let logger = Logger::shared();
    logger.set_prefix(ctx.config.logger_prefix.clone());

    if ctx.json {
        logger.record(&args.text);
        println!("{}", serde_json::to_string_pretty(&logger.entries())?);
    } else {
        logger.log(&args.text);
    }
    Ok(())
}
