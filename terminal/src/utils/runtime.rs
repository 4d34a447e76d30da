/// Global Tokio runtime for async load operations
///
/// Screen interactions (pull-to-refresh, first appearance) arrive on the
/// synchronous UI thread, but every `ItemsService` load is async. This static
/// runtime bridges the two:
/// 1. The app spawns each load onto `TOKIO_RT`
/// 2. The load's outcome is sent back over the app's event channel and
///    drained on the UI thread in `App::on_tick`

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async load operations")
});
