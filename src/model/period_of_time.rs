//! dct:PeriodOfTime

use super::{add_date, ToRdf};
use crate::error::{DcatError, DcatResult, IntervalEndpoint};
use crate::rdf::vocab::{dcat, dct, ns, rdf};
use crate::rdf::{BlankNode, Graph, RdfSubject};
use crate::values::Date;

/// An interval of time, always rendered as a blank node
///
/// Once both endpoints are set, `start_date <= end_date` holds. A setter that
/// would break this fails and keeps the previous value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodOfTime {
    start_date: Option<Date>,
    end_date: Option<Date>,
}

impl PeriodOfTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<&Date> {
        self.start_date.as_ref()
    }

    pub fn end_date(&self) -> Option<&Date> {
        self.end_date.as_ref()
    }

    pub fn set_start_date(&mut self, value: &str) -> DcatResult<()> {
        let start = Date::new(value)?;
        if let Some(end) = &self.end_date {
            check_interval(&start, end, IntervalEndpoint::Start)?;
        }
        self.start_date = Some(start);
        Ok(())
    }

    pub fn set_end_date(&mut self, value: &str) -> DcatResult<()> {
        let end = Date::new(value)?;
        if let Some(start) = &self.start_date {
            check_interval(start, &end, IntervalEndpoint::End)?;
        }
        self.end_date = Some(end);
        Ok(())
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = BlankNode::new().into();
        graph.add(&subject, rdf::TYPE, dct::PERIOD_OF_TIME);
        add_date(graph, &subject, dcat::START_DATE, self.start_date.as_ref());
        add_date(graph, &subject, dcat::END_DATE, self.end_date.as_ref());
        Ok(subject)
    }
}

fn check_interval(start: &Date, end: &Date, set_last: IntervalEndpoint) -> DcatResult<()> {
    if start <= end {
        return Ok(());
    }
    Err(DcatError::InvalidDateInterval {
        start_date: start.to_string(),
        end_date: end.to_string(),
        set_last,
        message: "start_date after end_date".to_string(),
    })
}

impl ToRdf for PeriodOfTime {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("dcat", ns::DCAT);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
