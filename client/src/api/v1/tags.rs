use common::wrapped::Envelope;
use common::{Server, Tag, TagCreate, TagModify, TagName};
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

pub struct TagsApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> TagsApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Tag>, UpCloudError> {
        self.client.get("/tag", "/tags/tag")
    }

    pub fn get(&self, name: &TagName) -> Result<Tag, UpCloudError> {
        self.client.get(&format!("/tag/{name}"), "/tag")
    }

    pub fn create(&self, tag: &TagCreate) -> Result<Tag, UpCloudError> {
        self.client
            .post("/tag", Some(&Envelope::new("tag", tag)), "/tag")
    }

    /// Updates `name`; set `changes.name` to rename the tag.
    pub fn modify(&self, name: &TagName, changes: &TagModify) -> Result<Tag, UpCloudError> {
        self.client
            .put(&format!("/tag/{name}"), &Envelope::new("tag", changes), "/tag")
    }

    pub fn delete(&self, name: &TagName) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/tag/{name}"))
    }

    /// Tags `server` with every name in `tags`, creating unknown tags.
    pub fn assign(&self, server: &Uuid, tags: &[TagName]) -> Result<Server, UpCloudError> {
        let list = joined(tags)?;
        self.client
            .post::<_, ()>(&format!("/server/{server}/tag/{list}"), None, "/server")
    }

    pub fn remove(&self, server: &Uuid, tags: &[TagName]) -> Result<Server, UpCloudError> {
        let list = joined(tags)?;
        self.client
            .post::<_, ()>(&format!("/server/{server}/untag/{list}"), None, "/server")
    }
}

fn joined(tags: &[TagName]) -> Result<String, UpCloudError> {
    if tags.is_empty() {
        return Err(UpCloudError::InvalidArgument(
            "at least one tag is required".to_string(),
        ));
    }
    Ok(TagName::join(tags))
}
