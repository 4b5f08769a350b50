//! Turns dataset rows into displayable content: text cards for text
//! embeddings, base64 thumbnails for everything else.

use crate::config::HiveConfig;
use crate::error::ContentError;
use crate::layout::{Node, Style};
use crate::models::{Bitmap, ContentElement, EmbeddingType, ImageRef, MetaMap, Point};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat};
use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};

const NO_PARENT_TEXT: &str = "No parent text available";
const NO_CHILD_TEXT: &str = "No child text available";

lazy_static::lazy_static! {
    static ref THUMBNAIL_STYLE: Style = Style::from_pairs(&[
        ("marginRight", "0.5rem"),
        ("border", "1px solid #bbb"),
        ("maxWidth", "300px"),
        ("maxHeight", "300px"),
        ("objectFit", "contain"),
    ]);

    static ref TEXT_CARD_STYLE: Style = Style::from_pairs(&[
        ("margin", "0"),
        ("padding", "0.75rem"),
        ("backgroundColor", "#f8fdff"),
        ("border", "1px solid #e1e8ed"),
        ("borderRadius", "6px"),
        ("fontFamily", "system-ui, -apple-system, sans-serif"),
        ("fontSize", "0.9rem"),
        ("lineHeight", "1.4"),
        ("color", "#2c3e50"),
        ("maxWidth", "220px"),
        ("wordWrap", "break-word"),
        ("boxShadow", "0 1px 3px rgba(0,0,0,0.1)"),
    ]);

    static ref UNAVAILABLE_CARD_STYLE: Style = Style::from_pairs(&[
        ("margin", "0"),
        ("padding", "0.75rem"),
        ("backgroundColor", "#f8f9fa"),
        ("border", "1px solid #e1e8ed"),
        ("borderRadius", "6px"),
        ("fontFamily", "system-ui, -apple-system, sans-serif"),
        ("fontSize", "0.9rem"),
        ("fontStyle", "italic"),
        ("color", "#6c757d"),
        ("maxWidth", "220px"),
    ]);
}

#[derive(Debug, Clone)]
pub struct ContentResolver {
    config: HiveConfig,
}

impl ContentResolver {
    pub fn new(config: HiveConfig) -> Self {
        ContentResolver { config }
    }

    pub fn config(&self) -> &HiveConfig {
        &self.config
    }

    /// Text card for text embeddings with known metadata, "unavailable" card for
    /// text embeddings without it, thumbnail otherwise. Never fails.
    pub fn resolve(
        &self,
        index: usize,
        images: Option<&[ImageRef]>,
        points: Option<&[Point]>,
        meta: Option<&MetaMap>,
    ) -> ContentElement {
        if let Some(point) = points.and_then(|points| points.get(index)) {
            match &point.embedding_type {
                Some(kind) if kind.is_text() => {
                    return match lookup_text(kind, point, meta) {
                        Ok(text) => ContentElement::text(text),
                        Err(err) => {
                            tracing::debug!(index, %err, "text content unavailable");
                            ContentElement::unavailable()
                        }
                    };
                }
                Some(EmbeddingType::Other(kind)) => {
                    let err = ContentError::UnsupportedEmbedding(kind.clone());
                    tracing::debug!(index, %err, "rendering as image");
                }
                _ => {}
            }
        }

        self.render_image(index, images)
    }

    pub fn render_image(&self, index: usize, images: Option<&[ImageRef]>) -> ContentElement {
        let Some(images) = images else {
            return ContentElement::Empty;
        };

        match self.try_render_image(index, images) {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!(index, %err, "image content unavailable");
                ContentElement::Empty
            }
        }
    }

    pub fn try_render_image(
        &self,
        index: usize,
        images: &[ImageRef],
    ) -> Result<ContentElement, ContentError> {
        let image = images.get(index).ok_or(ContentError::IndexOutOfRange {
            index,
            len: images.len(),
        })?;

        let src = match image {
            ImageRef::Bitmap(bitmap) => self.encode_bitmap(bitmap)?,
            ImageRef::Missing => {
                tracing::debug!(index, "row has no image");
                String::new()
            }
            ImageRef::Path(reference) => match self.encode_image_path(reference) {
                Ok(uri) => uri,
                // Blank image rather than a failed render pass.
                Err(ContentError::MissingFile(path)) => {
                    tracing::debug!(index, path = %path.display(), "image file not found");
                    String::new()
                }
                Err(err) => return Err(err),
            },
        };

        Ok(ContentElement::Image { src })
    }

    pub fn resolve_path(&self, reference: &str) -> PathBuf {
        if reference.starts_with(&self.config.hierarchical_prefix) {
            PathBuf::from(reference)
        } else {
            self.config.dataset_root.join(reference)
        }
    }

    pub fn encode_image_path(&self, reference: &str) -> Result<String, ContentError> {
        let path = self.resolve_path(reference);
        let mime = mime_subtype(&path);

        let bytes = std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ContentError::MissingFile(path.clone()),
            _ => ContentError::Io {
                path: path.clone(),
                source,
            },
        })?;

        Ok(data_uri(mime, &bytes))
    }

    /// Scales raw intensities, then upsizes to a square PNG thumbnail.
    ///
    /// Scaled values clamp to 0..=255 instead of wrapping modulo 256, so a
    /// full-intensity 8x8 digit (16 * 16 = 256) stays white rather than
    /// turning black.
    pub fn encode_bitmap(&self, bitmap: &Bitmap) -> Result<String, ContentError> {
        let malformed = || ContentError::MalformedBitmap {
            width: bitmap.width,
            height: bitmap.height,
            len: bitmap.pixels.len(),
        };
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(malformed());
        }

        // `as u8` saturates: negatives and NaN become 0, overflow becomes 255.
        let pixels: Vec<u8> = bitmap
            .pixels
            .iter()
            .map(|&v| (v * self.config.bitmap_scale) as u8)
            .collect();
        let gray = GrayImage::from_raw(bitmap.width, bitmap.height, pixels).ok_or_else(malformed)?;

        let size = self.config.thumbnail_size;
        let resized = image::imageops::resize(&gray, size, size, FilterType::Nearest);

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(resized).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(data_uri("png", &png))
    }
}

fn lookup_text(
    kind: &EmbeddingType,
    point: &Point,
    meta: Option<&MetaMap>,
) -> Result<String, ContentError> {
    let synset_id = point.synset_id.as_deref().unwrap_or_default();
    let entry = meta
        .and_then(|meta| meta.get(synset_id))
        .ok_or_else(|| ContentError::MissingMetadata(synset_id.to_string()))?;

    match kind {
        EmbeddingType::ParentText => Ok(entry
            .name
            .clone()
            .unwrap_or_else(|| NO_PARENT_TEXT.to_string())),
        EmbeddingType::ChildText => Ok(entry
            .description
            .clone()
            .unwrap_or_else(|| NO_CHILD_TEXT.to_string())),
        other => Err(ContentError::UnsupportedEmbedding(other.as_str().to_string())),
    }
}

pub fn mime_subtype(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "png",
        _ => "jpeg",
    }
}

pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:image/{mime};base64,{}", STANDARD.encode(bytes))
}

/// Splits `data:image/<mime>;base64,<payload>` into the MIME subtype and the decoded bytes.
pub fn decode_data_uri(uri: &str) -> Option<(&str, Vec<u8>)> {
    let (mime, payload) = uri.strip_prefix("data:image/")?.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime, bytes))
}

impl ContentElement {
    pub fn into_node(self) -> Node {
        match self {
            ContentElement::Image { src } => Node::img(&src).with_style(THUMBNAIL_STYLE.clone()),
            ContentElement::Text { text, unavailable } => {
                let style = if unavailable {
                    UNAVAILABLE_CARD_STYLE.clone()
                } else {
                    TEXT_CARD_STYLE.clone()
                };
                Node::div(vec![Node::paragraph(&text).with_style(style)])
                    .with_style(Style::from_pairs(&[("marginRight", "0.5rem")]))
            }
            ContentElement::Empty => Node::span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Component;
    use crate::models::SynsetMeta;
    use image::{ColorType, GenericImageView};
    use std::fs;
    use tempfile::tempdir;

    fn resolver_at(root: &Path) -> ContentResolver {
        ContentResolver::new(HiveConfig::default().with_dataset_root(root))
    }

    fn meta() -> MetaMap {
        let mut meta = MetaMap::new();
        meta.insert(
            "n01440764".to_string(),
            SynsetMeta {
                name: Some("tench".to_string()),
                description: Some("freshwater dace-like game fish".to_string()),
            },
        );
        meta
    }

    #[test]
    fn nothing_to_show_is_empty() {
        let resolver = ContentResolver::new(HiveConfig::default());
        assert_eq!(resolver.resolve(0, None, None, None), ContentElement::Empty);
        assert_eq!(resolver.resolve(42, None, Some(&[]), Some(&meta())), ContentElement::Empty);
    }

    #[test]
    fn parent_text_uses_synset_name() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let points = vec![Point::text(EmbeddingType::ParentText, "n01440764")];
        let element = resolver.resolve(0, None, Some(&points), Some(&meta()));
        assert_eq!(element, ContentElement::text("tench"));
    }

    #[test]
    fn child_text_uses_synset_description() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let points = vec![Point::image(), Point::text(EmbeddingType::ChildText, "n01440764")];
        let element = resolver.resolve(1, None, Some(&points), Some(&meta()));
        assert_eq!(element, ContentElement::text("freshwater dace-like game fish"));
    }

    #[test]
    fn unknown_synset_is_unavailable() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let points = vec![Point::text(EmbeddingType::ChildText, "n99999999")];
        let element = resolver.resolve(0, None, Some(&points), Some(&meta()));
        assert_eq!(element, ContentElement::unavailable());

        let without_meta = resolver.resolve(0, None, Some(&points), None);
        assert_eq!(without_meta, ContentElement::unavailable());
    }

    #[test]
    fn missing_label_field_has_placeholder_text() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let mut meta = MetaMap::new();
        meta.insert("n1".to_string(), SynsetMeta::default());
        let points = vec![
            Point::text(EmbeddingType::ParentText, "n1"),
            Point::text(EmbeddingType::ChildText, "n1"),
        ];
        assert_eq!(
            resolver.resolve(0, None, Some(&points), Some(&meta)),
            ContentElement::text("No parent text available")
        );
        assert_eq!(
            resolver.resolve(1, None, Some(&points), Some(&meta)),
            ContentElement::text("No child text available")
        );
    }

    #[test]
    fn non_text_points_fall_back_to_images() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"not really a png").unwrap();
        let resolver = resolver_at(dir.path());
        let images = vec![ImageRef::Path("a.png".to_string())];
        let points = vec![Point {
            embedding_type: Some(EmbeddingType::Other("audio".to_string())),
            synset_id: Some("n01440764".to_string()),
        }];

        match resolver.resolve(0, Some(&images), Some(&points), Some(&meta())) {
            ContentElement::Image { src } => assert!(src.starts_with("data:image/png;base64,")),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn point_index_past_points_falls_back_to_images() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let points = vec![Point::text(EmbeddingType::ParentText, "n01440764")];
        let images = vec![
            ImageRef::Bitmap(Bitmap::from_flat(vec![1.0; 4]).unwrap()),
            ImageRef::Bitmap(Bitmap::from_flat(vec![2.0; 4]).unwrap()),
        ];
        let element = resolver.resolve(1, Some(&images), Some(&points), Some(&meta()));
        assert!(matches!(element, ContentElement::Image { .. }));
    }

    #[test]
    fn bitmap_becomes_64px_grayscale_png() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let digit = Bitmap::from_flat((0..64).map(|v| (v % 17) as f64).collect()).unwrap();
        let images = vec![ImageRef::Bitmap(digit)];

        let ContentElement::Image { src } = resolver.render_image(0, Some(&images)) else {
            panic!("expected image element");
        };
        let (mime, bytes) = decode_data_uri(&src).unwrap();
        assert_eq!(mime, "png");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!(decoded.dimensions(), (64, 64));
        assert_eq!(decoded.color(), ColorType::L8);
    }

    #[test]
    fn bitmap_values_are_scaled_by_sixteen() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let bitmap = Bitmap::from_rows(vec![vec![0.0, 1.0], vec![8.0, 20.0]]).unwrap();
        let src = resolver.encode_bitmap(&bitmap).unwrap();
        let (_, bytes) = decode_data_uri(&src).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();

        assert_eq!(decoded.get_pixel(0, 0).0, [0]);
        assert_eq!(decoded.get_pixel(63, 0).0, [16]);
        assert_eq!(decoded.get_pixel(0, 63).0, [128]);
        assert_eq!(decoded.get_pixel(63, 63).0, [255]);
    }

    #[test]
    fn full_intensity_digit_stays_white() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let bitmap = Bitmap::from_flat(vec![16.0; 64]).unwrap();
        let src = resolver.encode_bitmap(&bitmap).unwrap();
        let (_, bytes) = decode_data_uri(&src).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert!(decoded.pixels().all(|p| p.0 == [255]));
    }

    #[test]
    fn malformed_bitmap_degrades_to_empty() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let broken = Bitmap {
            width: 3,
            height: 3,
            pixels: vec![1.0; 4],
        };
        let images = vec![ImageRef::Bitmap(broken.clone())];
        assert!(matches!(
            resolver.encode_bitmap(&broken),
            Err(ContentError::MalformedBitmap { len: 4, .. })
        ));
        assert_eq!(resolver.render_image(0, Some(&images)), ContentElement::Empty);
    }

    #[test]
    fn relative_path_reads_under_dataset_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("n01440764")).unwrap();
        fs::write(dir.path().join("n01440764/img1.JPEG"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        let resolver = resolver_at(dir.path());
        let images = vec![ImageRef::Path("n01440764/img1.JPEG".to_string())];

        let ContentElement::Image { src } = resolver.render_image(0, Some(&images)) else {
            panic!("expected image element");
        };
        assert!(src.starts_with("data:image/jpeg;base64,"));
        let (_, bytes) = decode_data_uri(&src).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn missing_file_gives_empty_source() {
        let dir = tempdir().unwrap();
        let resolver = resolver_at(dir.path());
        let images = vec![ImageRef::Path("n01440764/missing.JPEG".to_string())];

        assert!(matches!(
            resolver.encode_image_path("n01440764/missing.JPEG"),
            Err(ContentError::MissingFile(_))
        ));
        assert_eq!(
            resolver.render_image(0, Some(&images)),
            ContentElement::Image { src: String::new() }
        );
    }

    #[test]
    fn unreadable_path_is_empty() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("d.jpg")).unwrap();
        let resolver = resolver_at(dir.path());
        let images = vec![ImageRef::Path("d.jpg".to_string())];

        assert!(matches!(
            resolver.encode_image_path("d.jpg"),
            Err(ContentError::Io { .. })
        ));
        assert_eq!(resolver.render_image(0, Some(&images)), ContentElement::Empty);
    }

    #[test]
    fn row_without_image_gives_empty_source() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let images = vec![ImageRef::Missing];
        assert_eq!(
            resolver.render_image(0, Some(&images)),
            ContentElement::Image { src: String::new() }
        );
    }

    #[test]
    fn prefixed_path_is_already_rooted() {
        let resolver = ContentResolver::new(HiveConfig::default());
        assert_eq!(
            resolver.resolve_path("hierchical_datasets/grit/0001.jpg"),
            PathBuf::from("hierchical_datasets/grit/0001.jpg")
        );
        assert_eq!(
            resolver.resolve_path("n01440764/img1.JPEG"),
            PathBuf::from("imagenet-subset/n01440764/img1.JPEG")
        );
    }

    #[test]
    fn prefixed_path_ignores_dataset_root() {
        let dir = tempdir().unwrap();
        let hierarchical = dir.path().join("hier");
        fs::create_dir_all(&hierarchical).unwrap();
        fs::write(hierarchical.join("leaf.png"), b"png bytes").unwrap();

        let prefix = format!("{}/", hierarchical.display());
        let resolver = ContentResolver::new(
            HiveConfig::default()
                .with_dataset_root(dir.path().join("elsewhere"))
                .with_hierarchical_prefix(prefix.clone()),
        );
        let uri = resolver.encode_image_path(&format!("{prefix}leaf.png")).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn out_of_range_index_is_empty() {
        let resolver = ContentResolver::new(HiveConfig::default());
        let images = vec![ImageRef::Path("a.jpg".to_string())];
        assert!(matches!(
            resolver.try_render_image(5, &images),
            Err(ContentError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(resolver.render_image(5, Some(&images)), ContentElement::Empty);
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_subtype(Path::new("a/b.JPEG")), "jpeg");
        assert_eq!(mime_subtype(Path::new("a/b.jpg")), "jpeg");
        assert_eq!(mime_subtype(Path::new("a/b.PNG")), "png");
        assert_eq!(mime_subtype(Path::new("a/b.webp")), "jpeg");
        assert_eq!(mime_subtype(Path::new("a/b")), "jpeg");
    }

    #[test]
    fn elements_convert_to_nodes() {
        match ContentElement::unavailable().into_node().children[0].clone() {
            Node {
                component: Component::Paragraph { text },
                style,
                ..
            } => {
                assert_eq!(text, "Text content unavailable");
                assert_eq!(style.get("fontStyle"), Some("italic"));
            }
            other => panic!("unexpected node {other:?}"),
        }
        assert_eq!(ContentElement::Empty.into_node().component, Component::Span);
        assert!(matches!(
            ContentElement::Image { src: String::new() }.into_node().component,
            Component::Img { .. }
        ));
    }
}
