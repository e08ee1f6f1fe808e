//! Frame transformation utilities.

use super::types::Frame;

/// Mirror a frame horizontally (flip left-right) for selfie mode.
///
/// Frames whose data is shorter than their dimensions claim are left
/// untouched.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let bpp = frame.bytes_per_pixel();
    let stride = width * bpp;

    if stride == 0 || frame.data.len() < frame.expected_len() {
        return;
    }

    for row in frame.data.chunks_exact_mut(stride) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            let (head, tail) = row.split_at_mut(right);
            head[left..left + bpp].swap_with_slice(&mut tail[..bpp]);
        }
    }
}
