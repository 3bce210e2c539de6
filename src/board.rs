//! Lost-and-found board: the list of reported items, the category filter and the
//! report form.

use crate::api::{ApiResult, LostFoundBackend, SelectedFile, UploadForm, UploadReceipt};
use crate::config::join_url;
use crate::types::{Filter, Item, ItemKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub kind: ItemKind,
    pub description: String,
    pub location: String,
    pub contact_info: String,
    pub selected_file: Option<SelectedFile>,
}

impl ReportForm {
    fn snapshot(&self) -> UploadForm {
        UploadForm {
            kind: self.kind,
            description: self.description.clone(),
            location: non_empty(&self.location),
            contact_info: non_empty(&self.contact_info),
            file: self.selected_file.clone(),
        }
    }

    fn reset(&mut self) {
        self.description.clear();
        self.location.clear();
        self.contact_info.clear();
        self.selected_file = None;
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemBoard {
    pub form: ReportForm,
    filter: Filter,
    items: Vec<Item>,
    /// Indices into `items` that pass `filter`.
    visible: Vec<usize>,
    filter_revision: u64,
    file_input_key: u64,
}

impl ItemBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.visible.iter().map(move |&index| &self.items[index])
    }

    /// Number of times the filtered view has been recomputed.
    pub fn filter_revision(&self) -> u64 {
        self.filter_revision
    }

    /// Changes whenever the file input has to be emptied; the view keys the input
    /// element on it so a new, empty one is mounted.
    pub fn file_input_key(&self) -> u64 {
        self.file_input_key
    }

    pub fn apply_filter(&mut self) {
        let filter = self.filter;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.kind))
            .map(|(index, _)| index)
            .collect();
        self.filter_revision += 1;
    }

    pub fn change_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.apply_filter();
    }

    /// Replace the whole list with a fresh fetch. Relative image paths are made
    /// absolute against `image_base` and every item starts collapsed.
    pub fn replace_items(&mut self, items: Vec<Item>, image_base: &str) {
        self.items = items
            .into_iter()
            .map(|mut item| {
                item.expanded = false;
                item.image_path = item
                    .image_path
                    .take()
                    .filter(|path| !path.is_empty())
                    .map(|path| absolute_image_url(image_base, &path));
                item
            })
            .collect();
        self.apply_filter();
    }

    pub fn load_items(&mut self, result: ApiResult<Vec<Item>>, image_base: &str) {
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "items fetched");
                self.replace_items(items, image_base);
            }
            Err(err) => tracing::error!("error fetching items: {err}"),
        }
    }

    pub async fn fetch_items<B>(&mut self, backend: &B)
    where
        B: LostFoundBackend + ?Sized,
    {
        let result = backend.list_items().await;
        self.load_items(result, backend.base_url());
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.expanded = !item.expanded;
        }
    }

    /// Keep the first picked file. An empty selection leaves the current one alone.
    pub fn on_file_selected(&mut self, files: Vec<SelectedFile>) {
        if let Some(first) = files.into_iter().next() {
            self.form.selected_file = Some(first);
        }
    }

    pub fn prepare_upload(&self) -> UploadForm {
        self.form.snapshot()
    }

    /// Apply the upload result to the form. Returns `true` when the list should be
    /// fetched again; on failure the form is kept as typed so it can be resubmitted.
    pub fn finish_upload(&mut self, result: ApiResult<UploadReceipt>) -> bool {
        match result {
            Ok(receipt) => {
                tracing::debug!(id = %receipt.id, detections = receipt.detections.len(), "item reported");
                self.form.reset();
                self.file_input_key += 1;
                true
            }
            Err(err) => {
                tracing::error!("error submitting item: {err}");
                false
            }
        }
    }

    pub async fn submit_item<B>(&mut self, backend: &B) -> bool
    where
        B: LostFoundBackend + ?Sized,
    {
        let result = backend.upload(self.prepare_upload()).await;
        let submitted = self.finish_upload(result);
        if submitted {
            self.fetch_items(backend).await;
        }
        submitted
    }
}

fn absolute_image_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        join_url(base, path)
    }
}
