//! Generic action builders.
//!
//! Every setter clones the current call state and returns a new builder, so a
//! partially configured action can be reused as a template:
//!
//! ```no_run
//! # use fluent_api::FluentApi;
//! # async fn example(api: FluentApi) -> fluent_api::Result<()> {
//! let base = api.inventory().server().list().set_page_limit(20);
//! let first = base.set_page_start(1).execute().await?;
//! let second = base.set_page_start(21).execute().await?;
//! # Ok(())
//! # }
//! ```

use crate::core::query::{Filter, Page, Query, Sort};
use crate::domain::model::ApiCall;
use crate::domain::ports::Transport;
use crate::utils::error::{FluentApiError, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

pub trait ActionKind: Send + Sync + 'static {
    const NAME: &'static str;
    /// URL segment appended to the resource's base url.
    const PATH: &'static str;
    const REQUIRES_ID: bool;

    fn method() -> Method {
        Method::POST
    }
}

macro_rules! action_kind {
    ($kind:ident, $name:literal, $requires_id:literal) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $kind;

        impl ActionKind for $kind {
            const NAME: &'static str = $name;
            const PATH: &'static str = $name;
            const REQUIRES_ID: bool = $requires_id;
        }
    };
}

action_kind!(Create, "create", false);
action_kind!(Update, "update", true);
action_kind!(Delete, "delete", true);
action_kind!(Get, "get", true);
action_kind!(List, "list", false);
action_kind!(Collect, "collect", true);

/// Mutable part of an action, copied on every setter call.
#[derive(Debug, Clone, Default)]
pub struct ApiState<P> {
    pub url: String,
    pub parameter: P,
    /// Fields written with `set_id` / `set`; merged over the serialized parameter.
    pub extra: Map<String, Value>,
    pub query: Query,
}

pub struct Action<K, P, R> {
    transport: Arc<dyn Transport>,
    id_field: Option<String>,
    /// Body fields besides the id that must be present before dispatch.
    required_fields: Vec<String>,
    state: ApiState<P>,
    _marker: PhantomData<fn() -> (K, R)>,
}

pub type CreateAction<P, R> = Action<Create, P, R>;
pub type UpdateAction<P, R> = Action<Update, P, R>;
pub type SingleDeleteAction<P, R> = Action<Delete, P, R>;
pub type GetAction<P, R> = Action<Get, P, R>;
pub type ListAction<P, R> = Action<List, P, R>;
pub type CollectAction<P, R> = Action<Collect, P, R>;

impl<K, P: Clone, R> Clone for Action<K, P, R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            id_field: self.id_field.clone(),
            required_fields: self.required_fields.clone(),
            state: self.state.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K: ActionKind, P: fmt::Debug, R> fmt::Debug for Action<K, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("kind", &K::NAME)
            .field("id_field", &self.id_field)
            .field("required_fields", &self.required_fields)
            .field("state", &self.state)
            .finish()
    }
}

impl<K: ActionKind, P: Default, R> Action<K, P, R> {
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        base_url: &str,
        id_field: Option<String>,
    ) -> Self {
        Self {
            transport,
            id_field,
            required_fields: Vec::new(),
            state: ApiState {
                url: format!("{}{}", base_url, K::PATH),
                ..Default::default()
            },
            _marker: PhantomData,
        }
    }
}

impl<K, P, R> Action<K, P, R> {
    pub(crate) fn require_field(mut self, field: &str) -> Self {
        self.required_fields.push(field.to_string());
        self
    }
}

impl<K: ActionKind, P: Clone, R> Action<K, P, R> {
    fn with_state(&self, update: impl FnOnce(&mut ApiState<P>)) -> Self {
        let mut next = self.clone();
        update(&mut next.state);
        next
    }

    pub fn url(&self) -> &str {
        &self.state.url
    }

    pub fn id_field(&self) -> Option<&str> {
        self.id_field.as_deref()
    }

    pub fn parameter(&self) -> &P {
        &self.state.parameter
    }

    pub fn state(&self) -> &ApiState<P> {
        &self.state
    }

    /// Replaces the typed parameter. An id already set with [`set_id`](Self::set_id) is kept.
    pub fn set_parameter(&self, parameter: P) -> Self {
        self.with_state(|state| state.parameter = parameter)
    }

    pub fn set_id(&self, id: impl Into<String>) -> Self {
        let Some(field) = self.id_field.clone() else {
            tracing::warn!("{} has no id field; set_id ignored", self.state.url);
            return self.clone();
        };
        let id = id.into();
        self.with_state(|state| {
            state.extra.insert(field, Value::String(id));
        })
    }

    /// Sets an arbitrary body field. Takes precedence over the typed parameter.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        self.with_state(|state| {
            state.extra.insert(key, value);
        })
    }

    pub fn id(&self) -> Option<&str> {
        let field = self.id_field.as_deref()?;
        self.state.extra.get(field).and_then(Value::as_str)
    }
}

impl<K: ActionKind, P: Clone + Serialize, R> Action<K, P, R> {
    pub fn body(&self) -> Result<Value> {
        let mut body = match serde_json::to_value(&self.state.parameter)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(FluentApiError::validation(format!(
                    "parameter for {} must serialize to an object, got {}",
                    self.state.url, other
                )))
            }
        };

        if !self.state.query.is_empty() {
            self.state.query.validate()?;
            body.insert("query".to_string(), serde_json::to_value(&self.state.query)?);
        }

        for (key, value) in &self.state.extra {
            body.insert(key.clone(), value.clone());
        }

        Ok(Value::Object(body))
    }

    fn check_id(&self, body: &Value) -> Result<()> {
        if K::REQUIRES_ID {
            let Some(field) = self.id_field.as_deref() else {
                return Err(FluentApiError::validation(format!(
                    "{} requires an id but the resource has no id field",
                    self.state.url
                )));
            };
            self.check_field(body, field)?;
        }
        for field in &self.required_fields {
            self.check_field(body, field)?;
        }
        Ok(())
    }

    fn check_field(&self, body: &Value, field: &str) -> Result<()> {
        if is_id_value(body.get(field)) {
            Ok(())
        } else {
            Err(FluentApiError::MissingIdError {
                field: field.to_string(),
                url: self.state.url.clone(),
            })
        }
    }

    /// Builds the call descriptor without dispatching it.
    pub fn to_call(&self) -> Result<ApiCall> {
        let body = self.body()?;
        self.check_id(&body)?;
        let call = ApiCall::new(K::method(), self.state.url.clone(), body);
        tracing::debug!(action = K::NAME, url = %call.url, "Built API call");
        Ok(call)
    }
}

/// Ids are non-blank strings or numbers.
fn is_id_value(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(id)) => !id.trim().is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    }
}

impl<K: ActionKind, P: Clone + Serialize, R: DeserializeOwned> Action<K, P, R> {
    pub async fn execute(&self) -> Result<R> {
        let call = self.to_call()?;
        tracing::debug!("Dispatching {} {}", call.method, call.url);
        let response = self.transport.dispatch(&call).await?;
        Ok(serde_json::from_value(response)?)
    }
}

impl<P: Clone, R> Action<Get, P, R> {
    /// Restricts the returned fields.
    pub fn set_only<S: Into<String>>(&self, fields: impl IntoIterator<Item = S>) -> Self {
        let fields: Vec<Value> = fields.into_iter().map(|f| Value::String(f.into())).collect();
        self.set("only", Value::Array(fields))
    }
}

impl<P: Clone, R> Action<List, P, R> {
    pub fn query(&self) -> &Query {
        &self.state.query
    }

    pub fn set_query(&self, query: Query) -> Self {
        self.with_state(|state| state.query = query)
    }

    pub fn set_filter(&self, filters: impl IntoIterator<Item = Filter>) -> Self {
        let filters: Vec<Filter> = filters.into_iter().collect();
        self.with_state(|state| state.query.filter = filters)
    }

    pub fn add_filter(&self, filter: Filter) -> Self {
        self.with_state(|state| state.query.filter.push(filter))
    }

    pub fn set_filter_or(&self, filters: impl IntoIterator<Item = Filter>) -> Self {
        let filters: Vec<Filter> = filters.into_iter().collect();
        self.with_state(|state| state.query.filter_or = filters)
    }

    pub fn set_keyword(&self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.with_state(|state| state.query.keyword = Some(keyword))
    }

    pub fn set_sort_by(&self, key: impl Into<String>, desc: bool) -> Self {
        let key = key.into();
        self.with_state(|state| state.query.sort = Some(Sort { key, desc }))
    }

    pub fn set_page_start(&self, start: u32) -> Self {
        self.with_state(|state| {
            let page = state.query.page.get_or_insert_with(Page::default);
            page.start = start;
        })
    }

    pub fn set_page_limit(&self, limit: u32) -> Self {
        self.with_state(|state| {
            let page = state.query.page.get_or_insert_with(Page::default);
            page.limit = Some(limit);
        })
    }

    pub fn set_only<S: Into<String>>(&self, fields: impl IntoIterator<Item = S>) -> Self {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.with_state(|state| state.query.only = fields)
    }

    pub fn set_count_only(&self, count_only: bool) -> Self {
        self.with_state(|state| state.query.count_only = count_only)
    }
}
