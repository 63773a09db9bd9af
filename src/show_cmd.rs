use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::ShowArgs;
use crate::config::FlexcalConfig;
use crate::convert::build_pager;
use crate::render::render_month;

/// Prints the configured month.
pub fn run(args: ShowArgs, config: &FlexcalConfig) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let pager = build_pager(&config.calendar, &args.view, None)?;
    info!(
        month = %pager.current_month(),
        today = %pager.today(),
        "rendering month"
    );
    print!("{}", render_month(&pager)?);
    Ok(())
}
