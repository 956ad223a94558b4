//! Application commands
//!
//! [`BlogApp`] owns the view state and runs each user action as one request
//! followed by a local update. Failures are turned into a notification and
//! leave local state untouched.

use crate::blogs::BlogList;
use crate::error::{AppError, Result};
use crate::local_storage::KeyValueStorage;
use crate::models::{AppView, ViewUser};
use crate::notification::{Notification, NotificationStore};
use crate::session::SessionStore;
use bloglist_common::NOTIFICATION_TIMEOUT;
use bloglist_http::{ApiClient, Blog, BlogService, Credentials, LoggedUser, LoginService, NewBlog};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct BlogApp {
    blogs: BlogList,
    user: Option<LoggedUser>,
    username: String,
    password: String,
    new_blog_form_visible: bool,
    blog_service: BlogService,
    login_service: LoginService,
    session: SessionStore,
    notifications: NotificationStore,
    notification_timeout: Duration,
}

impl BlogApp {
    pub fn new(client: ApiClient, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            blogs: BlogList::new(),
            user: None,
            username: String::new(),
            password: String::new(),
            new_blog_form_visible: false,
            blog_service: BlogService::new(client.clone()),
            login_service: LoginService::new(client),
            session: SessionStore::new(storage),
            notifications: NotificationStore::new(),
            notification_timeout: NOTIFICATION_TIMEOUT,
        }
    }

    pub fn with_notification_timeout(mut self, timeout: Duration) -> Self {
        self.notification_timeout = timeout;
        self
    }

    /// Restore a persisted session without touching the network.
    ///
    /// The stored token is trusted as-is; it is not re-validated.
    pub fn restore_session(&mut self) -> Option<&LoggedUser> {
        if let Some(user) = self.session.load() {
            info!("[App] restored session for {}", user.username);
            self.blog_service.set_token(&user.token);
            self.user = Some(user);
        }
        self.user.as_ref()
    }

    /// Restore a persisted session and, if there is one, load the blogs.
    /// A failed load is only logged.
    pub async fn bootstrap(&mut self) -> Option<&LoggedUser> {
        if self.restore_session().is_some() {
            if let Err(e) = self.load_blogs().await {
                warn!("[App] initial blog load failed: {}", e);
            }
        }
        self.user.as_ref()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Log in with whatever is in the login form.
    pub async fn submit_login(&mut self) -> Result<LoggedUser> {
        let credentials = Credentials::new(self.username.clone(), self.password.clone());

        let user = match self.login_service.login(&credentials).await {
            Ok(user) => user,
            Err(e) => return Err(self.fail(AppError::Login(e))),
        };

        if let Err(e) = self.session.save(&user) {
            warn!("[App] session not persisted: {:#}", e);
        }
        self.blog_service.set_token(&user.token);
        self.user = Some(user.clone());
        self.username.clear();
        self.password.clear();

        if let Err(e) = self.load_blogs().await {
            warn!("[App] blog load after login failed: {}", e);
        }

        self.notify("Login succeed");
        Ok(user)
    }

    pub async fn login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoggedUser> {
        self.set_username(username);
        self.set_password(password);
        self.submit_login().await
    }

    /// Reload the whole collection from the server.
    pub async fn refresh_blogs(&mut self) -> Result<()> {
        self.load_blogs().await.map_err(|e| self.fail(e))
    }

    async fn load_blogs(&mut self) -> Result<()> {
        let blogs = self.blog_service.get_all().await.map_err(AppError::Load)?;
        self.blogs.replace_all(blogs);
        Ok(())
    }

    pub async fn add_blog(&mut self, blog: NewBlog) -> Result<Blog> {
        self.new_blog_form_visible = false;

        if self.user.is_none() {
            return Err(self.fail(AppError::Create(None)));
        }

        match self.blog_service.create(&blog).await {
            Ok(saved) => {
                info!("[App] added blog {} ({})", saved.title, saved.id);
                self.blogs.append(saved.clone());
                self.notify("New blog added");
                Ok(saved)
            }
            Err(e) => Err(self.fail(AppError::Create(Some(e)))),
        }
    }

    /// Add one like to the blog with `id` and swap in the server's copy.
    pub async fn like_blog(&mut self, id: &str) -> Result<Blog> {
        let update = match (&self.user, self.blogs.get(id)) {
            (Some(_), Some(blog)) => blog.liked(),
            _ => return Err(self.fail(AppError::Like(None))),
        };

        match self.blog_service.update(id, &update).await {
            Ok(updated) => {
                if !self.blogs.replace(updated.clone()) {
                    warn!("[App] server returned blog {} not in local list", updated.id);
                }
                self.notify("Likes has been updated");
                Ok(updated)
            }
            Err(e) => Err(self.fail(AppError::Like(Some(e)))),
        }
    }

    pub async fn delete_blog(&mut self, id: &str) -> Result<()> {
        if self.user.is_none() {
            return Err(self.fail(AppError::Delete(None)));
        }

        match self.blog_service.delete(id).await {
            Ok(()) => {
                self.blogs.remove(id);
                info!("[App] deleted blog {}", id);
                self.notify("Blog deleted");
                Ok(())
            }
            Err(e) => Err(self.fail(AppError::Delete(Some(e)))),
        }
    }

    /// Forget the session, the token and the loaded blogs.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!("[App] could not remove persisted session: {:#}", e);
        }
        self.blog_service.clear_token();
        if let Some(user) = self.user.take() {
            info!("[App] {} logged out", user.username);
        }
        self.blogs.clear();
        self.new_blog_form_visible = false;
    }

    pub fn show_new_blog_form(&mut self) {
        self.new_blog_form_visible = true;
    }

    pub fn hide_new_blog_form(&mut self) {
        self.new_blog_form_visible = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&LoggedUser> {
        self.user.as_ref()
    }

    pub fn blogs(&self) -> &BlogList {
        &self.blogs
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    /// Only the owner may remove a blog.
    pub fn can_delete(&self, blog: &Blog) -> bool {
        match (&self.user, blog.owner_username()) {
            (Some(user), Some(owner)) => user.username == owner,
            _ => false,
        }
    }

    pub fn view(&self) -> AppView {
        AppView {
            user: self.user.as_ref().map(ViewUser::from),
            blogs: if self.user.is_some() {
                self.blogs.as_slice().to_vec()
            } else {
                Vec::new()
            },
            notification: self.notifications.message(),
            new_blog_form_visible: self.new_blog_form_visible,
        }
    }

    fn notify(&self, message: &str) {
        self.notifications
            .set_notification(message, self.notification_timeout);
    }

    fn fail(&self, err: AppError) -> AppError {
        match std::error::Error::source(&err) {
            Some(source) => warn!("[App] {}: {}", err, source),
            None => warn!("[App] {}", err),
        }
        self.notify(&err.to_string());
        err
    }
}
