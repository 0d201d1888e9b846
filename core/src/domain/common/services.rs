/// Application service. Every domain service trait is implemented on this
/// struct; it only holds immutable handles, so cloning it per request is cheap.
#[derive(Clone)]
pub struct Service<SR, RR, HC, LLM> {
    pub(crate) suggestion_repository: SR,
    pub(crate) recipe_repository: RR,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
}

impl<SR, RR, HC, LLM> Service<SR, RR, HC, LLM> {
    pub fn new(
        suggestion_repository: SR,
        recipe_repository: RR,
        health_check_repository: HC,
        llm_client: LLM,
    ) -> Self {
        Self {
            suggestion_repository,
            recipe_repository,
            health_check_repository,
            llm_client,
        }
    }
}
