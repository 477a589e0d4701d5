//! HAL representations of the `users` resource.
//!
//! Links are rendered as absolute paths so the same document is valid
//! behind any host or proxy.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use domain::User;

use crate::repository::Page;

/// Collection path of the resource.
pub const USERS_PATH: &str = "/users";

/// Names of the exported finders.
pub const FIND_ONE_BY_LOGIN: &str = "findOneByLogin";
pub const FIND_ONE_BY_EMAIL_IGNORE_CASE: &str = "findOneByEmailIgnoreCase";

/// Hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: None,
        }
    }

    /// URI template link, e.g. `/users{?page,size}`.
    pub fn templated(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: Some(true),
        }
    }
}

/// Path of a single user item.
pub fn user_href(id: i64) -> String {
    format!("{}/{}", USERS_PATH, id)
}

fn page_href(number: u64, size: u64) -> String {
    format!("{}?page={}&size={}", USERS_PATH, number, size)
}

/// A user as returned by the resource.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub activated: bool,
    pub lang_key: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: UserLinks,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub user: Link,
}

impl From<User> for UserModel {
    fn from(user: User) -> Self {
        let href = user_href(user.id);
        Self {
            id: user.id,
            login: user.login,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            activated: user.activated,
            lang_key: user.lang_key,
            image_url: user.image_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
            links: UserLinks {
                self_link: Link::new(href.clone()),
                user: Link::new(href),
            },
        }
    }
}

/// Page of users with navigation links.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserCollection {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedUsers,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
    pub page: PageMetadata,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmbeddedUsers {
    pub users: Vec<UserModel>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
    pub search: Link,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

impl From<Page<User>> for UserCollection {
    fn from(page: Page<User>) -> Self {
        let total_pages = page.total_pages();
        let size = page.size;
        let number = page.number;

        // first/last only make sense once there is more than one page
        let multi_page = total_pages > 1;
        let links = CollectionLinks {
            self_link: Link::templated(format!("{}{{?page,size}}", USERS_PATH)),
            first: multi_page.then(|| Link::new(page_href(0, size))),
            prev: page
                .has_previous()
                .then(|| Link::new(page_href(number - 1, size))),
            next: page
                .has_next()
                .then(|| Link::new(page_href(number.saturating_add(1), size))),
            last: multi_page.then(|| Link::new(page_href(total_pages - 1, size))),
            search: Link::new(format!("{}/search", USERS_PATH)),
        };

        let metadata = PageMetadata {
            size,
            total_elements: page.total_elements,
            total_pages,
            number,
        };

        Self {
            embedded: EmbeddedUsers {
                users: page.items.into_iter().map(UserModel::from).collect(),
            },
            links,
            page: metadata,
        }
    }
}

/// Index of the exported finders.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchIndex {
    #[serde(rename = "_links")]
    pub links: SearchLinks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchLinks {
    #[serde(rename = "findOneByLogin")]
    pub find_one_by_login: Link,
    #[serde(rename = "findOneByEmailIgnoreCase")]
    pub find_one_by_email_ignore_case: Link,
    #[serde(rename = "self")]
    pub self_link: Link,
}

impl SearchIndex {
    pub fn new() -> Self {
        let search = format!("{}/search", USERS_PATH);
        Self {
            links: SearchLinks {
                find_one_by_login: Link::templated(format!(
                    "{}/{}{{?login}}",
                    search, FIND_ONE_BY_LOGIN
                )),
                find_one_by_email_ignore_case: Link::templated(format!(
                    "{}/{}{{?email}}",
                    search, FIND_ONE_BY_EMAIL_IGNORE_CASE
                )),
                self_link: Link::new(search),
            },
        }
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}
