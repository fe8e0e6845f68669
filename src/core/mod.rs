pub mod action;
pub mod query;
pub mod resource;

pub use crate::domain::model::{ApiCall, ListResponse};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
pub use action::{
    Action, ActionKind, ApiState, Collect, CollectAction, Create, CreateAction, Delete, Get,
    GetAction, List, ListAction, SingleDeleteAction, Update, UpdateAction,
};
pub use query::{Filter, FilterOperator, Page, Query, Sort};
pub use resource::{DynamicAction, DynamicResource, NoParameter, Resource};
