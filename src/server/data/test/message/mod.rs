mod delete_many;
mod find;
mod insert;

use super::*;
use crate::server::{
    data::message::{MessageFilter, MessageRepository},
    model::message::Message,
};
use test_utils::{factory::helpers::next_uuid, fixture};
