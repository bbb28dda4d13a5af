//! Use-Case-Funktionen für Canvas-Layout und Optionen.

use crate::app::AppState;
use crate::core::TurnPlanner;
use crate::shared::PlannerOptions;

/// Übernimmt die Canvas-Größe.
///
/// Beim ersten Layout wird das Fahrzeug mittig platziert, danach proportional
/// verschoben. Eine laufende Wiedergabe wird dabei verworfen.
pub fn resize(state: &mut AppState, width: f64, height: f64) {
    let Some(change) = state.store.set_dimensions(width, height) else {
        return;
    };

    if state.playback.take().is_some() {
        log::info!("Wiedergabe wegen Canvas-Änderung abgebrochen");
    }
    log::info!(
        "Canvas {}x{}, Fahrzeug bei {}",
        width,
        height,
        change.current
    );
}

/// Übernimmt neue Optionen, sofern der Wenderadius gültig ist.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) -> anyhow::Result<()> {
    TurnPlanner::new(options.turn_radius)?;
    state.options = options;
    log::info!("Optionen übernommen (Wenderadius {})", state.options.turn_radius);
    Ok(())
}
