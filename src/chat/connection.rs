//! TCP and TLS connection setup.

use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use super::IrcSettings;
use super::error::ChatError;
use super::tls::connector;

/// Byte stream the session runs over: plain TCP, TLS, or an in-memory pipe
/// in tests.
pub trait IrcStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<Stream> IrcStream for Stream where Stream: AsyncRead + AsyncWrite + Unpin + Send {}

/// Opens connections to the configured server.
///
/// TLS configuration is prepared once; the server name is checked on each
/// connect, before dialling.
pub struct IrcConnector {
    host: String,
    port: u16,
    tls: Option<TlsConnector>,
}

impl IrcConnector {
    /// Prepares a connector from the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Tls`] when rustls cannot be configured.
    pub fn new(settings: &IrcSettings) -> Result<Self, ChatError> {
        Ok(Self {
            host: settings.host.clone(),
            port: settings.port,
            tls: connector(settings.tls)?,
        })
    }

    /// Connects, performing the TLS handshake when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidServerName`] when TLS is on and the host
    /// is not a valid DNS name or IP address, [`ChatError::Io`] when the TCP
    /// connection fails, and [`ChatError::Tls`] when the handshake fails.
    pub async fn connect(&self) -> Result<Box<dyn IrcStream>, ChatError> {
        let Some(tls_connector) = &self.tls else {
            let tcp = TcpStream::connect((self.host.as_str(), self.port)).await?;
            return Ok(Box::new(tcp));
        };

        let server_name = ServerName::try_from(self.host.clone()).map_err(|_| {
            ChatError::InvalidServerName {
                host: self.host.clone(),
            }
        })?;
        let tcp = TcpStream::connect((self.host.as_str(), self.port)).await?;
        let stream = tls_connector
            .connect(server_name, tcp)
            .await
            .map_err(|error| ChatError::Tls {
                message: error.to_string(),
            })?;
        Ok(Box::new(stream))
    }
}
