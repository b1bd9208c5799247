//! Background decoding of the crate image.
//!
//! The render loop keeps drawing with the placeholder texture while the image
//! decodes on its own thread; the result crosses over through a channel that
//! is polled once per frame and delivers at most once.

use std::{path::PathBuf, sync::mpsc, thread};

use image::DynamicImage;

/// A one-shot background image load.
pub struct ImageLoader {
    receiver: Option<mpsc::Receiver<DynamicImage>>,
}

impl ImageLoader {
    /// Starts decoding the image at `path` on a background thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // A failed decode just drops the sender and the placeholder
            // texture stays up for the lifetime of the process.
            if let Ok(image) = image::open(&path) {
                let _ = sender.send(image);
            }
        });
        Self {
            receiver: Some(receiver),
        }
    }

    /// Yields the decoded image, at most once.
    ///
    /// Never blocks. Once the image has been handed over, or the load has
    /// failed, every later call returns `None`.
    pub fn poll(&mut self) -> Option<DynamicImage> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(image) => {
                self.receiver = None;
                Some(image)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Whether the load could still deliver an image.
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use image::GenericImageView;

    use super::*;

    fn poll_until_settled(loader: &mut ImageLoader, timeout: Duration) -> Option<DynamicImage> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if let Some(image) = loader.poll() {
                return Some(image);
            }
            if !loader.is_pending() {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn delivers_the_decoded_image_exactly_once() {
        let path = std::env::temp_dir().join("cratespin-loader-delivers.png");
        image::RgbaImage::from_pixel(2, 3, image::Rgba([0, 255, 0, 255]))
            .save(&path)
            .unwrap();

        let mut loader = ImageLoader::spawn(&path);
        let image =
            poll_until_settled(&mut loader, Duration::from_secs(10)).expect("image never arrived");
        assert_eq!(image.dimensions(), (2, 3));

        // The transition is one-way; nothing ever comes out again.
        assert!(loader.poll().is_none());
        assert!(!loader.is_pending());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_settles_without_an_image() {
        let mut loader = ImageLoader::spawn("definitely/not/a/real/image.png");
        assert!(poll_until_settled(&mut loader, Duration::from_secs(10)).is_none());
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }
}
