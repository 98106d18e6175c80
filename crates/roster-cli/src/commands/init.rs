use roster_core::FileStorage;

use crate::app::{resolve_config_path, resolve_data_dir, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, RosterConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;

    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Pass --force to overwrite it",
        )
        .into());
    }

    // An existing config is being replaced, so only the flag or XDG default apply.
    let data_dir = resolve_data_dir(ctx.cli().data_dir.as_deref(), &RosterConfig::default())?;
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        )
    })?;

    let mut config = RosterConfig::new(data_dir.clone());
    config.ui.ascii = ctx.cli().ascii;
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        let storage = FileStorage::new(&data_dir);
        let slot_path = storage.slot_path(&config.storage.slot)?;
        let config_display = config_path.display().to_string();
        let data_display = slot_path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                Badge::Ok,
                "Initialized roster",
                &[
                    ("Config", config_display.as_str()),
                    ("Data", data_display.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
