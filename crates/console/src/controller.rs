//! The view controller.
//!
//! [`Console`] owns the whole client-side state - session, gateway, cache,
//! current tab, pending notices - and orchestrates every flow: load on
//! entry, role-scoped booking fetches, and the call → notice → reload →
//! re-render cycle for mutations. Nothing mutates the cache optimistically;
//! a change becomes visible only through the reload that follows the
//! backend's acknowledgement.

use secrecy::SecretString;
use serde_json::json;
use tracing::{instrument, warn};

use hotelier_core::{BookingId, HotelId, RoomId, RoomStatus, UserId};

use crate::api::{ApiClient, ApiError};
use crate::cache::DomainCache;
use crate::config::ConsoleConfig;
use crate::error::AppError;
use crate::forms::{self, Form};
use crate::models::{Booking, Hotel, LoginRequest, Room, RoomSearch, RoomWithHotel, TokenResponse, User};
use crate::notify::{Notice, Notices};
use crate::policy::{self, Action, Actor};
use crate::session::SessionStore;
use crate::views::{self, Tab};

/// The console's application state and entry point.
pub struct Console {
    api: ApiClient,
    session: SessionStore,
    cache: DomainCache,
    tab: Tab,
    notices: Notices,
}

impl Console {
    /// Open the console: load any persisted session and hand its token to
    /// the gateway.
    pub async fn open(config: &ConsoleConfig) -> Self {
        let api = ApiClient::new(config);
        let session = SessionStore::open(config.session_file.clone());

        if let Some(token) = session.access_token() {
            api.set_token(token.clone()).await;
        }

        Self {
            api,
            session,
            cache: DomainCache::default(),
            tab: Tab::default(),
            notices: Notices::default(),
        }
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// The currently shown tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// The cached collections (read-only; reloads replace them).
    #[must_use]
    pub const fn cache(&self) -> &DomainCache {
        &self.cache
    }

    /// Drain pending notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in and load the initial data set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoginFailed`] when the backend rejects the
    /// credentials, or a load error from the initial data fetch.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        let request = LoginRequest { email, password };
        let token: TokenResponse = self
            .api
            .post("/users/login", &request)
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?;

        let first_name = token.user.first_name.clone();
        self.session
            .set_access_token(Some(SecretString::from(token.access_token)))?;
        self.session.set_current_user(token.user)?;
        if let Some(secret) = self.session.access_token() {
            self.api.set_token(secret.clone()).await;
        }

        self.notices
            .success(format!("Добро пожаловать, {first_name}!"));
        self.tab = Tab::Hotels;
        self.load_all().await
    }

    /// Register a new account and enter the authenticated view.
    ///
    /// The role is always forced to `user`; only an already-authenticated
    /// admin creates privileged accounts, through the guests tab.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoginFailed`] when registration is rejected.
    #[instrument(skip(self, form))]
    pub async fn register(&mut self, form: &Form) -> Result<(), AppError> {
        let mut body = forms::body(form);
        body.insert("role".to_string(), json!("user"));

        let user: User = self
            .api
            .post("/users/register", &body)
            .await
            .map_err(|e| AppError::LoginFailed(e.to_string()))?;

        let first_name = user.first_name.clone();
        self.session.set_current_user(user)?;
        self.notices.success(format!(
            "Регистрация успешна! Добро пожаловать, {first_name}!"
        ));
        self.tab = Tab::Hotels;
        self.load_all().await
    }

    /// Log out: clear persisted session state, the gateway token and the
    /// cache, and return to the unauthenticated view.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.session.logout()?;
        self.api.clear_token().await;
        self.cache.clear();
        self.tab = Tab::default();
        self.notices.success("Вы вышли из системы");
        Ok(())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load all four collections.
    ///
    /// Users load first; if the listing fails the session's own user record
    /// stands in, so the guests tab always has at least the operator.
    /// Hotels, rooms and bookings then load concurrently, each tolerating
    /// failure by rendering empty.
    ///
    /// # Errors
    ///
    /// Fails only when no user is logged in or the backend demands
    /// re-authentication.
    #[instrument(skip(self))]
    pub async fn load_all(&mut self) -> Result<(), AppError> {
        let actor = self.actor()?;

        self.load_users().await?;

        let bookings_path = bookings_endpoint(actor);
        let (hotels, rooms, bookings) = tokio::join!(
            self.api.get::<Vec<Hotel>>("/hotels/"),
            self.api.get::<Vec<Room>>("/rooms/"),
            self.api.get::<Vec<Booking>>(&bookings_path),
        );

        let hotels = self.tolerated("hotels", hotels).await?;
        self.cache.replace_hotels(hotels);
        let rooms = self.tolerated("rooms", rooms).await?;
        self.cache.replace_rooms(rooms);
        let bookings = self.tolerated("bookings", bookings).await?;
        self.cache.replace_bookings(bookings);

        Ok(())
    }

    /// Reload the users collection, falling back to the session's own user
    /// record when the listing is unavailable.
    async fn load_users(&mut self) -> Result<(), AppError> {
        match self.api.get::<Vec<User>>("/users/").await {
            Ok(users) => {
                self.cache.replace_users(users);
                Ok(())
            }
            Err(e) if e.is_auth_failure() => Err(self.absorb(e).await),
            Err(e) => {
                warn!(error = %e, "user list unavailable; falling back to session user");
                let fallback = self
                    .session
                    .current_user()
                    .cloned()
                    .map_or_else(Vec::new, |u| vec![u]);
                self.cache.replace_users(fallback);
                Ok(())
            }
        }
    }

    /// Reload the bookings collection, scoped by role.
    ///
    /// Admins fetch everything; anyone else fetches the user-scoped
    /// endpoint. The backend does the scoping - a client-side filter would
    /// be spoofable.
    ///
    /// # Errors
    ///
    /// Fails when no user is logged in or re-authentication is required.
    #[instrument(skip(self))]
    pub async fn load_bookings(&mut self) -> Result<(), AppError> {
        let actor = self.actor()?;
        let result = self.api.get::<Vec<Booking>>(&bookings_endpoint(actor)).await;
        let bookings = self.tolerated("bookings", result).await?;
        self.cache.replace_bookings(bookings);
        Ok(())
    }

    async fn load_hotels(&mut self) -> Result<(), AppError> {
        let result = self.api.get::<Vec<Hotel>>("/hotels/").await;
        let hotels = self.tolerated("hotels", result).await?;
        self.cache.replace_hotels(hotels);
        Ok(())
    }

    async fn load_rooms(&mut self) -> Result<(), AppError> {
        let result = self.api.get::<Vec<Room>>("/rooms/").await;
        let rooms = self.tolerated("rooms", result).await?;
        self.cache.replace_rooms(rooms);
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Switch to a tab and render it from the cache.
    ///
    /// Only cached data is consulted; the guests tab recomputes its booking
    /// counters on every call by construction, since rendering is pure.
    pub fn show_tab(&mut self, tab: Tab) -> String {
        self.tab = tab;
        self.render()
    }

    /// Render the current tab.
    #[must_use]
    pub fn render(&self) -> String {
        match self.actor() {
            Ok(actor) => views::render(&self.cache, actor, self.tab),
            Err(_) => "Войдите в систему, чтобы продолжить\n".to_string(),
        }
    }

    /// Render one guest's bookings from the cache.
    ///
    /// # Errors
    ///
    /// Fails when no user is logged in.
    pub fn render_guest_bookings(&self, user_id: UserId) -> Result<String, AppError> {
        let actor = self.actor()?;
        if !policy::sees_guest_id(actor, user_id) {
            return Err(AppError::Forbidden(
                "Недостаточно прав для просмотра этих бронирований".to_string(),
            ));
        }
        Ok(views::render_bookings_of(&self.cache, user_id))
    }

    // =========================================================================
    // Hotel mutations
    // =========================================================================

    /// Create or update a hotel from a submitted form.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self, form))]
    pub async fn save_hotel(&mut self, id: Option<HotelId>, form: &Form) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::ManageHotels) {
            return Err(self.refuse("Недостаточно прав для управления отелями"));
        }

        let body = forms::body(form);
        let result: Result<Hotel, ApiError> = match id {
            Some(id) => self.api.put(&format!("/hotels/{id}"), &body).await,
            None => self.api.post("/hotels/", &body).await,
        };

        match result {
            Ok(_) => {
                self.notices.success(if id.is_some() {
                    "Отель успешно обновлен"
                } else {
                    "Отель успешно создан"
                });
                self.load_hotels().await
            }
            Err(e) => Err(self.report(e, "Ошибка при сохранении отеля").await),
        }
    }

    /// Delete a hotel.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self))]
    pub async fn delete_hotel(&mut self, id: HotelId) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::ManageHotels) {
            return Err(self.refuse("Недостаточно прав для управления отелями"));
        }

        match self.api.delete(&format!("/hotels/{id}")).await {
            Ok(()) => {
                self.notices.success("Отель успешно удален");
                self.load_hotels().await
            }
            Err(e) => Err(self.report(e, "Ошибка при удалении отеля").await),
        }
    }

    // =========================================================================
    // Room mutations
    // =========================================================================

    /// Create or update a room from a submitted form.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self, form))]
    pub async fn save_room(&mut self, id: Option<RoomId>, form: &Form) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::ManageRooms) {
            return Err(self.refuse("Недостаточно прав для управления комнатами"));
        }

        let body = forms::body(form);
        let result: Result<Room, ApiError> = match id {
            Some(id) => self.api.put(&format!("/rooms/{id}"), &body).await,
            None => self.api.post("/rooms/", &body).await,
        };

        match result {
            Ok(_) => {
                self.notices.success(if id.is_some() {
                    "Комната успешно обновлена"
                } else {
                    "Комната успешно создана"
                });
                self.load_rooms().await
            }
            Err(e) => Err(self.report(e, "Ошибка при сохранении комнаты").await),
        }
    }

    /// Change a room's operational status.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal, an unselectable status, or a backend
    /// error.
    #[instrument(skip(self))]
    pub async fn update_room_status(
        &mut self,
        id: RoomId,
        status: RoomStatus,
    ) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::ManageRooms) {
            return Err(self.refuse("Недостаточно прав для изменения статуса комнат"));
        }
        if !RoomStatus::SELECTABLE.contains(&status) {
            return Err(AppError::InvalidInput(format!(
                "Неверный статус комнаты: {status}"
            )));
        }

        let path = format!("/rooms/{id}/status");
        match self
            .api
            .put_unit_with_query(&path, &[("status", status.as_str())])
            .await
        {
            Ok(()) => {
                self.notices
                    .success(format!("Статус комнаты обновлен на {status}"));
                self.load_rooms().await
            }
            Err(e) => Err(self.report(e, "Ошибка при изменении статуса комнаты").await),
        }
    }

    /// Delete a room.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self))]
    pub async fn delete_room(&mut self, id: RoomId) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::ManageRooms) {
            return Err(self.refuse("Недостаточно прав для удаления комнат"));
        }

        match self.api.delete(&format!("/rooms/{id}")).await {
            Ok(()) => {
                self.notices.success("Комната успешно удалена");
                self.load_rooms().await
            }
            Err(e) => Err(self.report(e, "Ошибка при удалении комнаты").await),
        }
    }

    /// Search available rooms. Read-only; the cache is not touched.
    ///
    /// # Errors
    ///
    /// Fails on a backend error.
    #[instrument(skip(self))]
    pub async fn search_rooms(
        &mut self,
        search: &RoomSearch,
    ) -> Result<Vec<RoomWithHotel>, AppError> {
        match self
            .api
            .get_with_query("/rooms/search/available", search)
            .await
        {
            Ok(found) => Ok(found),
            Err(e) => Err(self.report(e, "Ошибка при поиске комнат").await),
        }
    }

    // =========================================================================
    // Guest mutations
    // =========================================================================

    /// Create a guest account or update a profile from a submitted form.
    ///
    /// Non-admins may only edit themselves, and any `role` field they
    /// submit is dropped before the request goes out.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self, form))]
    pub async fn save_guest(&mut self, id: Option<UserId>, form: &Form) -> Result<(), AppError> {
        let actor = self.actor()?;
        let action = id.map_or(Action::CreateGuest, |target| Action::EditUser { target });
        if !policy::allows(actor, action) {
            return Err(self.refuse("Недостаточно прав для редактирования этого профиля"));
        }

        let mut body = forms::body(form);
        if !actor.is_admin() {
            body.remove("role");
        }

        let result: Result<User, ApiError> = match id {
            Some(id) => self.api.put(&format!("/users/{id}"), &body).await,
            None => self.api.post("/users/", &body).await,
        };

        match result {
            Ok(_) => {
                if let Some(id) = id {
                    self.notices.success("Профиль успешно обновлен");
                    if id == actor.id {
                        self.refresh_session_user(id).await?;
                    }
                } else {
                    self.notices.success("Гость успешно создан");
                }
                self.load_users().await
            }
            Err(e) => Err(self.report(e, "Ошибка при сохранении").await),
        }
    }

    /// Delete a guest account. Deleting the session's own account logs out.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self))]
    pub async fn delete_guest(&mut self, id: UserId) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::DeleteUser { target: id }) {
            return Err(self.refuse("Недостаточно прав для удаления этого пользователя"));
        }

        match self.api.delete(&format!("/users/{id}")).await {
            Ok(()) => {
                self.notices.success("Пользователь успешно удален");
                if id == actor.id {
                    self.logout().await
                } else {
                    self.load_users().await
                }
            }
            Err(e) => Err(self.report(e, "Ошибка при удалении").await),
        }
    }

    /// Re-fetch the session user after a self-edit so the persisted
    /// identity reflects the change.
    async fn refresh_session_user(&mut self, id: UserId) -> Result<(), AppError> {
        match self.api.get::<User>(&format!("/users/{id}")).await {
            Ok(mut updated) => {
                // Single-user payloads omit the role; keep the session's.
                if let Some(current) = self.session.current_user() {
                    updated.role = current.role;
                }
                self.session.set_current_user(updated)?;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "profile refresh failed; keeping previous session user");
                Ok(())
            }
        }
    }

    // =========================================================================
    // Booking mutations
    // =========================================================================

    /// Create or update a booking from a submitted form.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self, form))]
    pub async fn save_booking(
        &mut self,
        id: Option<BookingId>,
        form: &Form,
    ) -> Result<(), AppError> {
        let actor = self.actor()?;

        let body = forms::body(form);
        let action = if id.is_some() {
            Action::EditBooking
        } else {
            // The form's user_id decides whose booking this is; absent
            // means the actor books for themselves.
            let for_user = forms::extract_values(form)
                .get("user_id")
                .and_then(forms::FormValue::as_int)
                .and_then(|v| i32::try_from(v).ok())
                .map_or(actor.id, UserId::new);
            Action::CreateBooking { for_user }
        };
        if !policy::allows(actor, action) {
            return Err(self.refuse("Недостаточно прав для управления этим бронированием"));
        }

        let result: Result<Booking, ApiError> = match id {
            Some(id) => self.api.put(&format!("/bookings/{id}"), &body).await,
            None => self.api.post("/bookings/", &body).await,
        };

        match result {
            Ok(_) => {
                self.notices.success(if id.is_some() {
                    "Бронирование успешно обновлено"
                } else {
                    "Бронирование успешно создано"
                });
                self.load_bookings().await
            }
            Err(e) => Err(self.report(e, "Ошибка при сохранении бронирования").await),
        }
    }

    /// Register a guest's arrival.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal, a transition the lifecycle table forbids,
    /// or a backend error.
    #[instrument(skip(self))]
    pub async fn check_in(&mut self, id: BookingId) -> Result<(), AppError> {
        let actor = self.actor()?;
        let booking = self.cached_booking(id)?;

        if !policy::allows(actor, Action::CheckInBooking) {
            return Err(self.refuse("Недостаточно прав для регистрации заезда"));
        }
        if !policy::can_check_in(actor, &booking) {
            return Err(AppError::InvalidTransition {
                status: booking.status,
            });
        }

        match self.api.put_unit(&format!("/bookings/{id}/check-in")).await {
            Ok(()) => {
                self.notices.success("Заезд успешно зарегистрирован");
                self.load_bookings().await
            }
            Err(e) => Err(self.report(e, "Ошибка при регистрации заезда").await),
        }
    }

    /// Register a guest's departure.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal, a transition the lifecycle table forbids,
    /// or a backend error.
    #[instrument(skip(self))]
    pub async fn check_out(&mut self, id: BookingId) -> Result<(), AppError> {
        let actor = self.actor()?;
        let booking = self.cached_booking(id)?;

        if !policy::allows(actor, Action::CheckOutBooking) {
            return Err(self.refuse("Недостаточно прав для регистрации выезда"));
        }
        if !policy::can_check_out(actor, &booking) {
            return Err(AppError::InvalidTransition {
                status: booking.status,
            });
        }

        match self.api.put_unit(&format!("/bookings/{id}/check-out")).await {
            Ok(()) => {
                self.notices.success("Выезд успешно зарегистрирован");
                self.load_bookings().await
            }
            Err(e) => Err(self.report(e, "Ошибка при регистрации выезда").await),
        }
    }

    /// Cancel a booking.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal, a transition the lifecycle table forbids,
    /// or a backend error.
    #[instrument(skip(self))]
    pub async fn cancel_booking(&mut self, id: BookingId) -> Result<(), AppError> {
        let actor = self.actor()?;
        let booking = self.cached_booking(id)?;

        if !policy::allows(
            actor,
            Action::CancelBooking {
                owner: booking.user_id,
            },
        ) {
            return Err(self.refuse("Недостаточно прав для отмены этого бронирования"));
        }
        if !policy::can_cancel(actor, &booking) {
            return Err(AppError::InvalidTransition {
                status: booking.status,
            });
        }

        match self.api.put_unit(&format!("/bookings/{id}/cancel")).await {
            Ok(()) => {
                self.notices.success("Бронирование успешно отменено");
                self.load_bookings().await
            }
            Err(e) => Err(self.report(e, "Ошибка при отмене бронирования").await),
        }
    }

    /// Delete a booking record.
    ///
    /// # Errors
    ///
    /// Fails on a policy refusal or a backend error.
    #[instrument(skip(self))]
    pub async fn delete_booking(&mut self, id: BookingId) -> Result<(), AppError> {
        let actor = self.actor()?;
        if !policy::allows(actor, Action::DeleteBooking) {
            return Err(self.refuse("Недостаточно прав для удаления бронирований"));
        }

        match self.api.delete(&format!("/bookings/{id}")).await {
            Ok(()) => {
                self.notices.success("Бронирование успешно удалено");
                self.load_bookings().await
            }
            Err(e) => Err(self.report(e, "Ошибка при удалении бронирования").await),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn actor(&self) -> Result<Actor, AppError> {
        self.session
            .current_user()
            .map(Actor::from_user)
            .ok_or(AppError::NotAuthenticated)
    }

    fn cached_booking(&self, id: BookingId) -> Result<Booking, AppError> {
        self.cache
            .booking(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("бронирование #{id}")))
    }

    /// Record a policy refusal notice and build the error.
    fn refuse(&mut self, message: &str) -> AppError {
        self.notices.error(message);
        AppError::Forbidden(message.to_string())
    }

    /// Record a failure notice and absorb an auth failure into the session.
    async fn report(&mut self, err: ApiError, context: &str) -> AppError {
        let err = self.absorb(err).await;
        self.notices.error(format!("{context}: {err}"));
        err
    }

    /// On an authentication failure, clear the session and return to the
    /// unauthenticated state; other errors pass through.
    async fn absorb(&mut self, err: ApiError) -> AppError {
        if err.is_auth_failure() {
            if let Err(e) = self.session.logout() {
                warn!(error = %e, "failed to clear session after auth failure");
            }
            self.api.clear_token().await;
            self.cache.clear();
            self.tab = Tab::default();
        }
        AppError::Api(err)
    }

    /// Treat one collection's load failure as an empty collection, except
    /// for authentication failures, which end the session.
    async fn tolerated<T>(
        &mut self,
        collection: &str,
        result: Result<Vec<T>, ApiError>,
    ) -> Result<Vec<T>, AppError> {
        match result {
            Ok(items) => Ok(items),
            Err(e) if e.is_auth_failure() => Err(self.absorb(e).await),
            Err(e) => {
                warn!(collection, error = %e, "collection load failed; rendering empty");
                Ok(Vec::new())
            }
        }
    }
}

/// The bookings endpoint an actor is allowed to read.
pub(crate) fn bookings_endpoint(actor: Actor) -> String {
    if actor.is_admin() {
        "/bookings/".to_string()
    } else {
        format!("/bookings/user/{}/bookings", actor.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use hotelier_core::UserRole;

    fn test_config(dir: &tempfile::TempDir) -> ConsoleConfig {
        ConsoleConfig {
            api_url: url::Url::parse("http://127.0.0.1:9/api/v1").unwrap(),
            session_file: dir.path().join("session.json"),
            timeout: std::time::Duration::from_secs(1),
        }
    }

    fn sample_user(id: i32, role: UserRole) -> User {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "email": format!("user{id}@example.com"),
            "first_name": "Анна",
            "last_name": "Иванова",
            "role": role,
            "created_at": "2024-03-01T09:30:00"
        }))
        .unwrap()
    }

    fn sample_booking(id: i32, user_id: i32, status: &str) -> Booking {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "booking_reference": format!("ref-{id}"),
            "user_id": user_id,
            "hotel_id": 3,
            "room_id": 12,
            "check_in_date": "2024-06-01T14:00:00",
            "check_out_date": "2024-06-05T12:00:00",
            "number_of_guests": 2,
            "total_price": 100.0,
            "status": status,
            "created_at": "2024-05-20T10:00:00"
        }))
        .unwrap()
    }

    async fn console_as(role: UserRole, dir: &tempfile::TempDir) -> Console {
        let mut console = Console::open(&test_config(dir)).await;
        console
            .session
            .set_current_user(sample_user(7, role))
            .unwrap();
        console
    }

    #[test]
    fn test_bookings_endpoint_is_role_scoped() {
        let admin = Actor {
            id: hotelier_core::UserId::new(1),
            role: UserRole::Admin,
        };
        assert_eq!(bookings_endpoint(admin), "/bookings/");

        let user = Actor {
            id: hotelier_core::UserId::new(7),
            role: UserRole::User,
        };
        assert_eq!(bookings_endpoint(user), "/bookings/user/7/bookings");
    }

    #[tokio::test]
    async fn test_unauthenticated_render() {
        let dir = tempfile::tempdir().unwrap();
        let console = Console::open(&test_config(&dir)).await;
        assert!(!console.is_authenticated());
        assert_eq!(console.render(), "Войдите в систему, чтобы продолжить\n");
    }

    #[tokio::test]
    async fn test_mutations_demand_authentication() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = Console::open(&test_config(&dir)).await;

        let form = Form::with_fields("hotel-form", &["name"]);
        let result = console.save_hotel(None, &form).await;
        assert!(matches!(result, Err(AppError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_policy_refusal_short_circuits_before_network() {
        // The API URL points at a dead port; a policy refusal must return
        // without ever dialing it.
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::User, &dir).await;

        let form = Form::with_fields("hotel-form", &["name"]);
        let result = console.save_hotel(None, &form).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let notices = console.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(
            notices
                .first()
                .unwrap()
                .text
                .contains("Недостаточно прав")
        );
    }

    #[tokio::test]
    async fn test_transition_guard_refuses_terminal_booking() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::Admin, &dir).await;
        console
            .cache
            .replace_bookings(vec![sample_booking(42, 7, "cancelled")]);

        let result = console.check_in(BookingId::new(42)).await;
        assert!(matches!(
            result,
            Err(AppError::InvalidTransition {
                status: hotelier_core::BookingStatus::Cancelled
            })
        ));
    }

    #[tokio::test]
    async fn test_non_admin_cannot_check_in_even_when_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::User, &dir).await;
        console
            .cache
            .replace_bookings(vec![sample_booking(42, 7, "confirmed")]);

        let result = console.check_in(BookingId::new(42)).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_cancel_refused_for_strangers_booking() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::User, &dir).await;
        console
            .cache
            .replace_bookings(vec![sample_booking(42, 8, "confirmed")]);

        let result = console.cancel_booking(BookingId::new(42)).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_unknown_booking_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::Admin, &dir).await;

        let result = console.cancel_booking(BookingId::new(99)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::Admin, &dir).await;
        console
            .cache
            .replace_bookings(vec![sample_booking(42, 7, "confirmed")]);

        console.logout().await.unwrap();
        assert!(!console.is_authenticated());
        assert!(console.cache().bookings().is_empty());
        assert!(!test_config(&dir).session_file.exists());
    }

    #[tokio::test]
    async fn test_inactive_room_status_is_rejected_client_side() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_as(UserRole::Admin, &dir).await;

        let result = console
            .update_room_status(RoomId::new(12), RoomStatus::Inactive)
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
