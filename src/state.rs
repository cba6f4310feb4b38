use crate::config::AppConfig;
use crate::services::persona::Persona;
use crate::services::silhouette::SilhouetteApi;

pub struct AppState {
    pub config: AppConfig,
    pub silhouette: Box<dyn SilhouetteApi>,
    pub persona: Persona,
}
