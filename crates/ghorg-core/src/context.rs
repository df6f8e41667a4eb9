use ghorg_config::Config;
use ghorg_ghapi_interface::ApiService;

use crate::CoreModule;

#[derive(Clone, Copy)]
pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}
