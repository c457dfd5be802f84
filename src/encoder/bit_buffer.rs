/// Growable MSB-first bit sequence used to assemble the data bitstream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    data: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.append_bit((value >> i) & 1 == 1);
        }
    }

    /// Append a single bit
    pub fn append_bit(&mut self, bit: bool) {
        let byte_index = self.length / 8;
        if byte_index == self.data.len() {
            self.data.push(0);
        }
        if bit {
            self.data[byte_index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Append every bit of another buffer
    pub fn append_buffer(&mut self, other: &BitBuffer) {
        for index in 0..other.len() {
            self.append_bit(other.get(index));
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether no bits have been written
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bit at `index`; false past the end
    pub fn get(&self, index: usize) -> bool {
        if index >= self.length {
            return false;
        }
        (self.data[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Backing bytes; a trailing partial byte is zero-filled
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its bytes; a trailing partial byte is zero-filled
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
