// chat/image_attachment_view.rs - Image attachment inside a chat message

use std::rc::{Rc, Weak};

use super::attachment::Attachment;
use super::image_fetch::{Image, ImageFetcher};
use crate::localization::Localizer;
use crate::ui::View;
use crate::ui::theme_registry::ThemeRegistry;
use crate::ui::widgets::{ActivityIndicator, Container, ImageView, Label};

pub const DEFAULT_HEIGHT: f32 = 250.0;
pub const INSECURE_IMAGE_PLACEHOLDER: &str = "Insecure Image";
pub const INSECURE_IMAGE_ALERT: &str = "alert.insecure_image";

/// Opens the full image when a loadable thumbnail is tapped
pub trait ImageAttachmentDelegate {
    fn open_image_from_cell(&self, attachment: &Attachment, thumbnail: &Rc<View>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    OpenImage(Attachment),
    /// Show the alert with this localization key
    Alert(String),
    Ignored,
}

/// Title, loading spinner and thumbnail for one image attachment
pub struct ChatMessageImageView {
    root: Rc<View>,
    title: Rc<View>,
    activity_indicator: Rc<View>,
    thumbnail: Rc<View>,
    attachment: Option<Attachment>,
    image: Option<Image>,
    placeholder_image: Option<String>,
    is_loadable: bool,
    tap_enabled: bool,
    delegate: Option<Weak<dyn ImageAttachmentDelegate>>,
}

impl ChatMessageImageView {
    pub fn new(registry: &Rc<ThemeRegistry>) -> Self {
        let root = View::new(registry, Container::new("image-attachment"));
        let title = View::new(registry, Label::default());
        let activity_indicator = View::new(registry, ActivityIndicator::new());
        let thumbnail = View::new(registry, ImageView::new());

        root.add_child(Rc::clone(&title));
        root.add_child(Rc::clone(&activity_indicator));
        root.add_child(Rc::clone(&thumbnail));

        Self {
            root,
            title,
            activity_indicator,
            thumbnail,
            attachment: None,
            image: None,
            placeholder_image: None,
            is_loadable: true,
            tap_enabled: false,
            delegate: None,
        }
    }

    pub fn view(&self) -> &Rc<View> {
        &self.root
    }

    pub fn thumbnail(&self) -> &Rc<View> {
        &self.thumbnail
    }

    pub fn set_delegate<D: ImageAttachmentDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        let weak: Weak<dyn ImageAttachmentDelegate> = weak;
        self.delegate = Some(weak);
    }

    /// Show `attachment`, fetching its image. Re-setting the attachment
    /// that is already shown does nothing.
    pub async fn set_attachment(
        &mut self,
        attachment: Attachment,
        fetcher: &dyn ImageFetcher,
        localizer: &dyn Localizer,
    ) {
        let cached = self
            .attachment
            .as_ref()
            .is_some_and(|current| current.identifier == attachment.identifier);
        self.attachment = Some(attachment);
        if cached {
            log::debug!("attachment is cached");
            return;
        }

        self.update_message_information(fetcher, localizer).await;
    }

    async fn update_message_information(
        &mut self,
        fetcher: &dyn ImageFetcher,
        localizer: &dyn Localizer,
    ) {
        self.tap_enabled = true;
        self.is_loadable = true;
        self.placeholder_image = None;
        self.image = None;
        self.set_title(String::new());
        self.thumbnail.widget_mut(|image: &mut ImageView| {
            image.image = None;
            image.placeholder = None;
        });

        let Some(attachment) = self.attachment.clone() else {
            return;
        };
        let Some(url) = attachment.full_image_url() else {
            log::debug!("Attachment {} has no image URL", attachment.identifier);
            return;
        };

        self.set_title(attachment.title.clone());
        self.check_http_image(&url, &attachment, localizer);

        let placeholder = self.placeholder_image.clone();
        self.thumbnail.widget_mut(|image: &mut ImageView| {
            image.placeholder = placeholder.clone();
        });

        self.set_loading(true);
        let result = fetcher.fetch(&url, placeholder.as_deref()).await;
        self.set_loading(false);

        match result {
            Ok(image) => {
                self.thumbnail.widget_mut(|view: &mut ImageView| {
                    view.image = Some(image.source.clone());
                });
                self.image = Some(image);
            }
            Err(e) => log::warn!("Failed to load attachment image {}: {}", url, e),
        }
    }

    fn check_http_image(&mut self, url: &str, attachment: &Attachment, localizer: &dyn Localizer) {
        if url.starts_with("http://") {
            self.is_loadable = false;
            self.set_title(format!(
                "{} ({})",
                attachment.title,
                localizer.localized("alert.insecure_image.title")
            ));
            self.placeholder_image = Some(INSECURE_IMAGE_PLACEHOLDER.to_string());
        }
    }

    fn set_title(&self, text: String) {
        self.title.widget_mut(|label: &mut Label| label.text = text);
    }

    fn set_loading(&self, loading: bool) {
        self.activity_indicator
            .widget_mut(|indicator: &mut ActivityIndicator| {
                if loading {
                    indicator.start_animating();
                } else {
                    indicator.stop_animating();
                }
            });
    }

    pub fn did_tap(&self) -> TapOutcome {
        let Some(attachment) = self.attachment.as_ref().filter(|_| self.tap_enabled) else {
            return TapOutcome::Ignored;
        };

        if !self.is_loadable {
            return TapOutcome::Alert(INSECURE_IMAGE_ALERT.to_string());
        }

        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.open_image_from_cell(attachment, &self.thumbnail);
        }
        TapOutcome::OpenImage(attachment.clone())
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn placeholder_image(&self) -> Option<&str> {
        self.placeholder_image.as_deref()
    }

    pub fn is_loadable(&self) -> bool {
        self.is_loadable
    }

    pub fn is_loading(&self) -> bool {
        self.activity_indicator
            .widget(|indicator: &ActivityIndicator| indicator.is_animating())
            .unwrap_or(false)
    }

    pub fn title_text(&self) -> String {
        self.title
            .widget(|label: &Label| label.text.clone())
            .unwrap_or_default()
    }
}
