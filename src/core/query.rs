use crate::utils::error::{FluentApiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Not,
    Lt,
    Lte,
    Gt,
    Gte,
    Exists,
    Contain,
    NotContain,
    In,
    NotIn,
    ContainIn,
    NotContainIn,
    DatetimeLt,
    DatetimeLte,
    DatetimeGt,
    DatetimeGte,
    TimediffLt,
    TimediffLte,
    TimediffGt,
    TimediffGte,
    Regex,
}

impl FilterOperator {
    /// `in` 系列運算子的值必須是陣列
    pub fn expects_list(self) -> bool {
        matches!(
            self,
            Self::In | Self::NotIn | Self::ContainIn | Self::NotContainIn
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub k: String,
    pub v: Value,
    pub o: FilterOperator,
}

impl Filter {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, operator: FilterOperator) -> Self {
        Self {
            k: key.into(),
            v: value.into(),
            o: operator,
        }
    }

    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, value, FilterOperator::Eq)
    }

    pub fn contain(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, value, FilterOperator::Contain)
    }

    pub fn in_list<V: Into<Value>>(key: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::new(key, Value::Array(values), FilterOperator::In)
    }

    pub fn exists(key: impl Into<String>, exists: bool) -> Self {
        Self::new(key, exists, FilterOperator::Exists)
    }

    fn validate(&self) -> Result<()> {
        if self.k.trim().is_empty() {
            return Err(FluentApiError::validation("filter key cannot be empty"));
        }
        if self.o != FilterOperator::Exists && self.v.is_null() {
            return Err(FluentApiError::validation(format!(
                "filter on '{}' needs a value",
                self.k
            )));
        }
        if self.o.expects_list() && !self.v.is_array() {
            return Err(FluentApiError::validation(format!(
                "filter on '{}' with operator {:?} needs a list value",
                self.k, self.o
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    pub key: String,
    #[serde(default)]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub start: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            start: 1,
            limit: None,
        }
    }
}

/// Query body of `list` calls. Empty parts are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_or: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub count_only: bool,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        for filter in self.filter.iter().chain(self.filter_or.iter()) {
            filter.validate()?;
        }
        if let Some(page) = &self.page {
            if page.start == 0 {
                return Err(FluentApiError::validation("page start is 1-based"));
            }
        }
        Ok(())
    }
}
