//! Back-office service: dashboard metrics, complaint triage, user
//! moderation, navigation config, site settings and the audit log.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::{
    data::{
        action_log::ActionLogRepository, complaint::ComplaintRepository,
        navigation::NavigationRepository, notification::NotificationRepository,
        post::PostRepository, route::RouteRepository, site_settings::SiteSettingsRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        admin::{
            ActionLogDto, ActionLogQuery, ActivityPointDto, AdminUserDto, BanToggleDto,
            ComplaintDto, ComplaintQuery, CreateComplaintRequest, DashboardDto, NavItemParams,
            NavigationItemDto, SiteSettingsDto, UpdateComplaintRequest, UpdateSiteSettingsRequest,
            UserRefDto,
        },
        notification::CreateNotificationParams,
    },
    state::AppState,
};
use entity::{complaint::ComplaintStatus, notification::NotificationKind};

/// Days covered by the dashboard "week" windows and the activity histogram.
const WEEK_DAYS: i64 = 7;

/// Service providing business logic for the admin back-office.
pub struct AdminService<'a> {
    state: &'a AppState,
}

impl<'a> AdminService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Headline metrics for the dashboard.
    pub async fn dashboard(&self) -> Result<DashboardDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let post_repo = PostRepository::new(&self.state.db);
        let route_repo = RouteRepository::new(&self.state.db);
        let complaint_repo = ComplaintRepository::new(&self.state.db);
        let log_repo = ActionLogRepository::new(&self.state.db);

        let week_ago = Utc::now() - Duration::days(WEEK_DAYS);

        Ok(DashboardDto {
            total_users: user_repo.count_all().await?,
            new_users_week: user_repo.count_joined_since(week_ago).await?,
            total_posts: post_repo.count_all().await?,
            new_posts_week: post_repo.count_created_since(week_ago).await?,
            total_routes: route_repo.count_all().await?,
            open_complaints: complaint_repo.count_open().await?,
            actions_week: log_repo.count_since(week_ago).await?,
        })
    }

    /// Seven-day activity histogram, one point per calendar day, oldest
    /// first. Days without activity still appear with a zero count.
    pub async fn activity_chart(&self) -> Result<Vec<ActivityPointDto>, AppError> {
        let log_repo = ActionLogRepository::new(&self.state.db);

        let today = Utc::now().date_naive();
        let start = today - Duration::days(WEEK_DAYS - 1);

        let timestamps = log_repo
            .created_since(
                start
                    .and_hms_opt(0, 0, 0)
                    .unwrap_or_default()
                    .and_utc(),
            )
            .await?;

        let mut buckets: HashMap<chrono::NaiveDate, u64> = HashMap::new();
        for timestamp in timestamps {
            *buckets.entry(timestamp.date_naive()).or_default() += 1;
        }

        let points = (0..WEEK_DAYS)
            .map(|offset| {
                let date = start + Duration::days(offset);
                ActivityPointDto {
                    date,
                    count: buckets.get(&date).copied().unwrap_or(0),
                }
            })
            .collect();

        Ok(points)
    }

    /// Files a complaint on behalf of the authenticated user.
    pub async fn file_complaint(
        &self,
        user: &entity::user::Model,
        request: CreateComplaintRequest,
    ) -> Result<ComplaintDto, AppError> {
        if request.text.trim().is_empty() {
            return Err(AppError::Validation {
                field: "text".to_string(),
                message: "Complaint text cannot be empty.".to_string(),
            });
        }

        let complaint_repo = ComplaintRepository::new(&self.state.db);
        let complaint = complaint_repo
            .create(user.id, request.category, request.text)
            .await?;

        self.complaint_dto(complaint).await
    }

    /// Complaints for the triage list, optionally filtered by status.
    pub async fn complaints(&self, query: &ComplaintQuery) -> Result<Vec<ComplaintDto>, AppError> {
        let complaint_repo = ComplaintRepository::new(&self.state.db);
        let complaints = complaint_repo.list(query.status.clone()).await?;

        let mut dtos = Vec::with_capacity(complaints.len());
        for complaint in complaints {
            dtos.push(self.complaint_dto(complaint).await?);
        }

        Ok(dtos)
    }

    /// Applies a triage update, stamping the handling staff member.
    ///
    /// A status change notifies the complainant with a system notification.
    pub async fn update_complaint(
        &self,
        staff: &entity::user::Model,
        complaint_id: i32,
        request: UpdateComplaintRequest,
    ) -> Result<ComplaintDto, AppError> {
        let complaint_repo = ComplaintRepository::new(&self.state.db);

        let Some(previous) = complaint_repo.find_by_id(complaint_id).await? else {
            return Err(AppError::NotFound("Complaint not found.".to_string()));
        };

        let status_changed = request
            .status
            .as_ref()
            .is_some_and(|status| *status != previous.status);

        let Some(updated) = complaint_repo
            .update(
                complaint_id,
                request.status,
                request.internal_comment,
                staff.id,
            )
            .await?
        else {
            return Err(AppError::NotFound("Complaint not found.".to_string()));
        };

        if status_changed {
            let notification_repo = NotificationRepository::new(&self.state.db);
            notification_repo
                .create(CreateNotificationParams {
                    user_id: updated.user_id,
                    actor_id: None,
                    kind: NotificationKind::System,
                    message: format!(
                        "Your complaint is now {}",
                        status_label(&updated.status)
                    ),
                    target_type: None,
                    target_id: None,
                })
                .await?;
        }

        self.complaint_dto(updated).await
    }

    /// Every account for the admin user list, newest first.
    pub async fn users(&self) -> Result<Vec<AdminUserDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let users = user_repo.list_all().await?;

        Ok(users.into_iter().map(admin_user_dto).collect())
    }

    /// Flips the ban flag on an account. Content is left in place; the
    /// account simply stops being usable or visible.
    ///
    /// Staff cannot ban themselves.
    pub async fn ban_toggle(
        &self,
        staff: &entity::user::Model,
        user_id: i32,
    ) -> Result<BanToggleDto, AppError> {
        if staff.id == user_id {
            return Err(AppError::BadRequest(
                "You cannot ban your own account.".to_string(),
            ));
        }

        let user_repo = UserRepository::new(&self.state.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        let Some(updated) = user_repo.set_active(user.id, !user.is_active).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        Ok(BanToggleDto {
            id: updated.id,
            is_active: updated.is_active,
        })
    }

    /// Current staff accounts.
    pub async fn admins(&self) -> Result<Vec<AdminUserDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let users = user_repo.list_staff().await?;

        Ok(users.into_iter().map(admin_user_dto).collect())
    }

    /// Grants staff to an account.
    pub async fn grant_admin(&self, user_id: i32) -> Result<AdminUserDto, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let Some(updated) = user_repo.set_staff(user_id, true).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        Ok(admin_user_dto(updated))
    }

    /// Revokes staff from an account. Staff cannot revoke their own access.
    pub async fn revoke_admin(
        &self,
        staff: &entity::user::Model,
        user_id: i32,
    ) -> Result<AdminUserDto, AppError> {
        if staff.id == user_id {
            return Err(AppError::BadRequest(
                "You cannot revoke your own staff access.".to_string(),
            ));
        }

        let user_repo = UserRepository::new(&self.state.db);

        let Some(updated) = user_repo.set_staff(user_id, false).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };

        Ok(admin_user_dto(updated))
    }

    /// Full navigation config for the admin editor.
    pub async fn navigation(&self) -> Result<Vec<NavigationItemDto>, AppError> {
        let nav_repo = NavigationRepository::new(&self.state.db);
        let items = nav_repo.list_all().await?;

        Ok(items.into_iter().map(nav_item_dto).collect())
    }

    /// Navigation entries shown to regular users.
    pub async fn public_navigation(&self) -> Result<Vec<NavigationItemDto>, AppError> {
        let nav_repo = NavigationRepository::new(&self.state.db);
        let items = nav_repo.list_for_users().await?;

        Ok(items.into_iter().map(nav_item_dto).collect())
    }

    /// Replaces the whole navigation config atomically.
    pub async fn replace_navigation(
        &self,
        items: Vec<NavItemParams>,
    ) -> Result<Vec<NavigationItemDto>, AppError> {
        for item in &items {
            if item.key.trim().is_empty() || item.label.trim().is_empty() {
                return Err(AppError::Validation {
                    field: "items".to_string(),
                    message: "Every navigation item needs a key and a label.".to_string(),
                });
            }
        }

        let nav_repo = NavigationRepository::new(&self.state.db);
        let stored = nav_repo.replace_all(items).await?;

        Ok(stored.into_iter().map(nav_item_dto).collect())
    }

    pub async fn settings(&self) -> Result<SiteSettingsDto, AppError> {
        let settings_repo = SiteSettingsRepository::new(&self.state.db);
        let settings = settings_repo.get_solo().await?;

        Ok(settings_dto(settings))
    }

    pub async fn update_settings(
        &self,
        request: UpdateSiteSettingsRequest,
    ) -> Result<SiteSettingsDto, AppError> {
        let settings_repo = SiteSettingsRepository::new(&self.state.db);
        let settings = settings_repo
            .update(request.is_closed_for_public, request.maintenance_message)
            .await?;

        Ok(settings_dto(settings))
    }

    /// Action log rows, newest first, with user references resolved.
    pub async fn action_logs(&self, query: &ActionLogQuery) -> Result<Vec<ActionLogDto>, AppError> {
        let log_repo = ActionLogRepository::new(&self.state.db);
        let rows = log_repo.list(query).await?;

        let users = self
            .user_refs(rows.iter().filter_map(|row| row.user_id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ActionLogDto {
                id: row.id,
                user: row.user_id.and_then(|user_id| users.get(&user_id).cloned()),
                action: row.action,
                path: row.path,
                ip_address: row.ip_address,
                created: row.created,
            })
            .collect())
    }

    async fn complaint_dto(
        &self,
        complaint: entity::complaint::Model,
    ) -> Result<ComplaintDto, AppError> {
        let mut ids = vec![complaint.user_id];
        if let Some(handled_by) = complaint.handled_by {
            ids.push(handled_by);
        }

        let users = self.user_refs(ids).await?;

        Ok(ComplaintDto {
            id: complaint.id,
            user: users.get(&complaint.user_id).cloned(),
            category: complaint.category,
            text: complaint.text,
            status: complaint.status,
            handled_by: complaint
                .handled_by
                .and_then(|handled_by| users.get(&handled_by).cloned()),
            internal_comment: complaint.internal_comment,
            created: complaint.created,
            updated: complaint.updated,
        })
    }

    async fn user_refs(&self, ids: Vec<i32>) -> Result<HashMap<i32, UserRefDto>, AppError> {
        let user_repo = UserRepository::new(&self.state.db);

        let mut unique = ids;
        unique.sort_unstable();
        unique.dedup();

        let users = user_repo.find_many(unique).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                (
                    user.id,
                    UserRefDto {
                        id: user.id,
                        username: user.username,
                    },
                )
            })
            .collect())
    }
}

fn admin_user_dto(user: entity::user::Model) -> AdminUserDto {
    AdminUserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        pilot_type: user.pilot_type,
        is_active: user.is_active,
        is_read_only: user.is_read_only,
        is_staff: user.is_staff,
        date_joined: user.date_joined,
        last_login: user.last_login,
    }
}

fn nav_item_dto(item: entity::navigation_item::Model) -> NavigationItemDto {
    NavigationItemDto {
        id: item.id,
        key: item.key,
        label: item.label,
        location: item.location,
        is_visible_for_users: item.is_visible_for_users,
        is_enabled: item.is_enabled,
        order: item.order,
    }
}

fn settings_dto(settings: entity::site_settings::Model) -> SiteSettingsDto {
    SiteSettingsDto {
        is_closed_for_public: settings.is_closed_for_public,
        maintenance_message: settings.maintenance_message,
        updated: settings.updated,
    }
}

fn status_label(status: &ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::New => "new",
        ComplaintStatus::InProgress => "in progress",
        ComplaintStatus::Closed => "closed",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_labels_read_naturally() {
        assert_eq!(status_label(&ComplaintStatus::InProgress), "in progress");
        assert_eq!(status_label(&ComplaintStatus::Closed), "closed");
    }
}
