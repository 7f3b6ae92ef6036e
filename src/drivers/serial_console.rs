use crate::hal::Uart;
use core::convert::Infallible;

pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }

    pub fn write_str(&mut self, s: &str) {
        self.uart.write_str(s);
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    // Print formatted debug info
    pub fn debug<T: ufmt::uDisplay + ?Sized>(&mut self, msg: &str, val: &T) {
        ufmt::uwrite!(self, "[DBG] {}: {}\r\n", msg, val).ok();
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.uart.write_str(s);
        Ok(())
    }
}
