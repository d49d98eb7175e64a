use axum::extract::FromRef;
use fxhash::FxHashMap;
use sme_domain::config::ApiConfig;
use sme_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[sme_derive::sme_error]
pub enum ApiStateError {
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared, cheaply cloneable request state: configuration plus feature slices.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns [`ApiStateError::MissingSlice`] if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>().ok_or_else(|| ApiStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Names of the registered slices (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(InitializedSlice::name)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: ApiConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a slice; a second slice of the same type replaces the first.
    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    #[must_use]
    pub fn register_slices<I>(self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        slices.into_iter().fold(self, Self::register_slice)
    }

    #[must_use]
    pub fn build(self) -> ApiState {
        ApiState { inner: Arc::new(ApiStateInner { config: self.config, slices: self.slices }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Probe(u8);

    impl FeatureSlice for Probe {
        fn name(&self) -> &'static str {
            "Probe"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn registered_slice_is_retrievable() {
        let state = ApiState::builder().register_slice(InitializedSlice::new(Probe(7))).build();

        assert_eq!(state.try_get_slice::<Probe>().map(|p| p.0).ok(), Some(7));
        assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["Probe"]);
    }

    #[test]
    fn missing_slice_is_an_error() {
        let state = ApiState::builder().build();
        let err = state.try_get_slice::<Probe>().expect_err("nothing registered");
        assert_eq!(err.code(), "MISSING_SLICE");
        assert!(err.to_string().contains("Probe"));
    }

    #[test]
    fn config_is_extractable() {
        let mut config = ApiConfig::default();
        config.server.port = 9100;
        let state = ApiState::builder().config(config).build();

        assert_eq!(ApiConfig::from_ref(&state).server.port, 9100);
    }
}
