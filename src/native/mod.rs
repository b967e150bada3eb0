//! Nativ splash-tjänst — den plattformsnivå-splash som visas innan vårt
//! fönster hunnit rita något alls

use crate::utils::{AppError, AppResult};

/// Tvåmetoders-gränssnitt mot plattformens splash-mekanism.
///
/// Båda anropen är tillåtna att misslyckas; anroparen sväljer alltid felet.
pub trait NativeSplash {
    /// Be plattformen att inte gömma sin splash automatiskt.
    /// Anropas en gång av värdapplikationen innan overlayn skapas.
    fn prevent_auto_hide(&self) -> AppResult<()>;

    /// Göm plattformens splash. Kan misslyckas om den redan är borta
    /// eller aldrig visades.
    fn hide(&self) -> AppResult<()>;
}

/// Desktop-standard: det finns ingen plattforms-splash att styra.
///
/// `hide()` rapporterar "inget att gömma" så att anroparens
/// feltolerans-väg faktiskt utövas även på desktop.
pub struct NoopNativeSplash;

impl NativeSplash for NoopNativeSplash {
    fn prevent_auto_hide(&self) -> AppResult<()> {
        Ok(())
    }

    fn hide(&self) -> AppResult<()> {
        Err(AppError::native_splash("ingen nativ splash att gömma"))
    }
}
