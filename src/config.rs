use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub boards: BoardsConfig,
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardsConfig {
    pub adc: SpiDeviceConfig,
    pub encoder: SpiDeviceConfig,
    pub counter: SpiDeviceConfig,
}

/// Transfer parameters for one board. Fixed for the handle's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiDeviceConfig {
    pub device: String,
    pub speed_hz: u32,
    pub mode: u8,
    pub bits_per_word: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    pub interval_ms: u64,
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

fn board_defaults(device: &str) -> SpiDeviceConfig {
    SpiDeviceConfig {
        device: device.to_string(),
        speed_hz: 20_000_000,
        mode: 0,
        bits_per_word: 8,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boards: BoardsConfig {
                adc: board_defaults("/dev/spidev4.0"),
                encoder: board_defaults("/dev/spidev5.0"),
                counter: board_defaults("/dev/spidev6.0"),
            },
            polling: PollingConfig { interval_ms: 100 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment() {
        let config = Config::default();
        assert_eq!(config.boards.adc.device, "/dev/spidev4.0");
        assert_eq!(config.boards.encoder.device, "/dev/spidev5.0");
        assert_eq!(config.boards.counter.device, "/dev/spidev6.0");
        assert_eq!(config.boards.adc.speed_hz, 20_000_000);
        assert_eq!(config.boards.adc.mode, 0);
        assert_eq!(config.boards.adc.bits_per_word, 8);
        assert_eq!(config.polling.interval_ms, 100);
    }

    #[test]
    fn parses_yaml_document() {
        let yaml = r#"
boards:
  adc:
    device: /dev/spidev4.0
    speed_hz: 10000000
    mode: 0
    bits_per_word: 8
  encoder:
    device: /dev/spidev5.0
    speed_hz: 20000000
    mode: 0
    bits_per_word: 8
  counter:
    device: /dev/spidev6.0
    speed_hz: 20000000
    mode: 3
    bits_per_word: 8
polling:
  interval_ms: 250
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.boards.adc.speed_hz, 10_000_000);
        assert_eq!(config.boards.counter.mode, 3);
        assert_eq!(config.polling.interval_ms, 250);
    }

    #[test]
    fn round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.boards.encoder.device, config.boards.encoder.device);
        assert_eq!(parsed.polling.interval_ms, config.polling.interval_ms);
    }
}
