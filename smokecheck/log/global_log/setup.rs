use tracing::{Dispatch, Level, Metadata, Subscriber};
use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, registry::LookupSpan, Layer};

use super::{
    builder::{CustomConf, GlobalLogBuilder, Output},
    GlobalLog,
};
use crate::prelude::*;

/// Need the write trait for our write function.
impl std::io::Write for CustomConf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let buf_len = buf.len();
        (self.write)(buf);
        Ok(buf_len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Need to be able to convert into a tracing writer:
impl<'writer> tracing_subscriber::fmt::MakeWriter<'writer> for CustomConf {
    type Writer = CustomConf;

    fn make_writer(&self) -> Self::Writer {
        self.clone()
    }
}

pub fn builder_into_global_log(builder: GlobalLogBuilder) -> RResult<GlobalLog, AnyErr> {
    // Configure the program to automatically log panics as an error event on the current span:
    super::exceptions::auto_trace_panics();

    let mut out_layers = vec![];
    let mut guards = vec![];

    for output in builder.outputs {
        match output {
            Output::Stdout(stdout) => {
                let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
                guards.push(guard);
                out_layers.push(
                    create_fmt_layer(
                        stdout.pretty,
                        false,
                        stdout.include_loc,
                        stdout.include_color,
                        writer,
                    )
                    .with_filter(filter_layer(stdout.shared.level_from))
                    .boxed(),
                );
            }
            Output::Stderr(stderr) => {
                let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
                guards.push(guard);
                out_layers.push(
                    create_fmt_layer(
                        stderr.pretty,
                        false,
                        stderr.include_loc,
                        stderr.include_color,
                        writer,
                    )
                    .with_filter(filter_layer(stderr.shared.level_from))
                    .boxed(),
                );
            }
            Output::Custom(custom) => {
                let level_from = custom.shared.level_from;
                out_layers.push(
                    create_fmt_layer(
                        custom.pretty,
                        custom.include_ts,
                        custom.include_loc,
                        custom.include_color,
                        custom,
                    )
                    .with_filter(filter_layer(level_from))
                    .boxed(),
                );
            }
        }
    }

    // Combine the layers into a single subscriber, boxing means the vec is itself a layer:
    let subscriber = tracing_subscriber::registry().with(out_layers);

    Ok(GlobalLog {
        dispatch: Some(Dispatch::new(subscriber)),
        _guards: guards,
    })
}

fn filter_layer(level_from: Level) -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
    FilterFn::new(move |metadata| level_from >= *metadata.level())
}

fn create_fmt_layer<S, W>(
    pretty: bool,
    include_timestamp: bool,
    include_loc: bool,
    include_color: bool,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + Send + Sync + 'static,
    for<'a> S: LookupSpan<'a>, // Each layer has a different type, so have to box for return
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static, // Allows all writers to be passed in before boxing
{
    // pretty/compact & time both change the layer type, hence the macro and the boxing per branch.
    macro_rules! base_layer {
        () => {
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_file(include_loc)
                .with_line_number(include_loc)
                .with_ansi(include_color)
                .with_writer(writer)
        };
    }

    if include_timestamp {
        // No need for the date or more than ms precision:
        let timer =
            time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
        let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
        let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

        if pretty {
            base_layer!().pretty().with_timer(timer).boxed()
        } else {
            base_layer!().compact().with_timer(timer).boxed()
        }
    } else if pretty {
        base_layer!().pretty().without_time().boxed()
    } else {
        base_layer!().compact().without_time().boxed()
    }
}
