use serde::Serialize;

use cutplan::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::FFDConfig;

#[derive(Serialize)]
pub struct Output {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: FFDConfig,
}
