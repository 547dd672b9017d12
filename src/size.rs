//! The `HasSize` capability and the readers that support it out of the box

use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Provides the size of the content delivered by a reader.
///
/// The size is a fact reported by whoever built the reader. It is not a
/// promise that exactly that many bytes will be read.
pub trait HasSize {
    /// Size of the whole content in bytes
    fn size(&self) -> u64;
}

/// A reader that also reports the size of its content
pub trait ReadWithSize: Read + HasSize {}

impl<T: Read + HasSize + ?Sized> ReadWithSize for T {}

/// In-memory buffers know their length. Like a string reader, the size is the
/// length of the whole buffer, not of the part left after the cursor.
impl<T: AsRef<[u8]>> HasSize for Cursor<T> {
    fn size(&self) -> u64 {
        self.get_ref().as_ref().len() as u64
    }
}

impl HasSize for io::Empty {
    fn size(&self) -> u64 {
        0
    }
}

impl<T: HasSize + ?Sized> HasSize for &T {
    fn size(&self) -> u64 {
        (**self).size()
    }
}

impl<T: HasSize + ?Sized> HasSize for &mut T {
    fn size(&self) -> u64 {
        (**self).size()
    }
}

impl<T: HasSize + ?Sized> HasSize for Box<T> {
    fn size(&self) -> u64 {
        (**self).size()
    }
}

/// Number of bytes between the current position of `reader` and its end.
///
/// The position is restored before returning.
pub fn stream_len<S: Seek + ?Sized>(reader: &mut S) -> io::Result<u64> {
    let current = reader.stream_position()?;
    let end = reader.seek(SeekFrom::End(0))?;
    if current != end {
        reader.seek(SeekFrom::Start(current))?;
    }
    Ok(end.saturating_sub(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_size_ignores_position() {
        let mut cursor = Cursor::new(b"content".to_vec());
        assert_eq!(cursor.size(), 7);

        let mut buf = [0u8; 3];
        cursor.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"con");
        assert_eq!(cursor.size(), 7);
    }

    #[test]
    fn test_empty_size() {
        assert_eq!(io::empty().size(), 0);
    }

    #[test]
    fn test_size_through_references() {
        let cursor = Cursor::new("content");
        let boxed: Box<dyn ReadWithSize> = Box::new(Cursor::new("content"));
        assert_eq!((&cursor).size(), 7);
        assert_eq!(boxed.size(), 7);
    }

    #[test]
    fn test_stream_len_restores_position() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data[..]);

        assert_eq!(stream_len(&mut cursor).unwrap(), 6);
        assert_eq!(cursor.position(), 0);

        cursor.seek(SeekFrom::Start(2)).unwrap();
        assert_eq!(stream_len(&mut cursor).unwrap(), 4);
        assert_eq!(cursor.position(), 2);

        cursor.seek(SeekFrom::End(0)).unwrap();
        assert_eq!(stream_len(&mut cursor).unwrap(), 0);
        assert_eq!(cursor.position(), 6);
    }
}
