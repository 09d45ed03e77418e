mod message;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
