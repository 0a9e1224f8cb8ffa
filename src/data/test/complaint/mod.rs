use crate::data::complaint::ComplaintRepository;
use entity::complaint::ComplaintStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod triage;
