use crate::cli::commands::{new_session, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export_view;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};
use crate::ui::prompt::StdinPrompt;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        dir,
        period,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let mut session = new_session(cfg);
        session.set_filter(period.selector()?);

        let view = session.recompute(store.entries());
        let payload = export_view(&view.view)?;

        let target = match (file, dir) {
            (Some(f), _) => ExportTarget::File(expand_tilde(f)),
            (None, Some(d)) => ExportTarget::Dir(expand_tilde(d)),
            (None, None) => ExportTarget::Dir(cfg.export_dir()),
        };

        let path = ExportLogic::deliver(&payload, *format, &target, *force, &mut StdinPrompt)?;

        ttlog_quiet(
            store.backend().conn(),
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} entries ({}) as {}",
                payload.len(),
                session.selector.describe(),
                format.as_str()
            ),
        );
    }
    Ok(())
}
