//! Program images handed to the chipset by the host.
use crate::{definitions::cpu, RomError};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The program bytes, stored on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data. The data has to
    /// fit into the program area of the memory.
    ///
    /// # Example
    /// ```rust
    /// # use chip::resources::Rom;
    /// # use chip::RomError;
    /// let rom = Rom::new("jump", vec![0x12u8, 0x00]).expect("a valid image");
    /// assert_eq!(rom.get_data(), &[0x12, 0x00]);
    /// assert_eq!(Rom::new("empty", Vec::<u8>::new()), Err(RomError::Empty));
    /// ```
    pub fn new<D: Into<Box<[u8]>>>(name: &str, data: D) -> Result<Self, RomError> {
        let data = data.into();
        if data.is_empty() {
            return Err(RomError::Empty);
        }
        if data.len() > cpu::PROGRAM_MAX_SIZE {
            return Err(RomError::TooLarge {
                size: data.len(),
                max: cpu::PROGRAM_MAX_SIZE,
            });
        }
        Ok(Rom {
            name: name.to_string(),
            data,
        })
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
