//! WebView placement within the window.

use winit::dpi::PhysicalSize;

/// The chat WebView covers the whole client area.
pub(super) fn full_window_rect(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_window_from_origin() {
        let rect = full_window_rect(PhysicalSize::new(960, 1520));

        match rect.position {
            wry::dpi::Position::Physical(pos) => {
                assert_eq!((pos.x, pos.y), (0, 0));
            }
            _ => panic!("Expected physical position"),
        }
        match rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!((size.width, size.height), (960, 1520));
            }
            _ => panic!("Expected physical size"),
        }
    }
}
