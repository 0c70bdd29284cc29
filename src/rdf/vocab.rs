//! Vocabulary terms used by the catalog mapping

use oxrdf::NamedNodeRef;

macro_rules! n {
    ($iri:expr) => {
        ::oxrdf::NamedNodeRef::new_unchecked($iri)
    };
}

type N = NamedNodeRef<'static>;

/// Namespace IRIs bound as prefixes in emitted graphs
pub mod ns {
    pub const DCT: &str = "http://purl.org/dc/terms/";
    pub const DCAT: &str = "http://www.w3.org/ns/dcat#";
    pub const DCATNO: &str = "https://data.norge.no/vocabulary/dcatno#";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const GEOSPARQL: &str = "http://www.opengis.net/ont/geosparql#";
    pub const LOCN: &str = "http://www.w3.org/ns/locn#";
    pub const MODELLDCATNO: &str = "https://data.norge.no/vocabulary/modelldcatno#";
    pub const ODRL: &str = "http://www.w3.org/ns/odrl/2/";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const PROV: &str = "http://www.w3.org/ns/prov#";
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
}

pub mod rdf {
    use super::N;

    pub const TYPE: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

pub mod xsd {
    use super::N;

    pub const DATE: N = n!("http://www.w3.org/2001/XMLSchema#date");
    pub const DECIMAL: N = n!("http://www.w3.org/2001/XMLSchema#decimal");
    pub const DURATION: N = n!("http://www.w3.org/2001/XMLSchema#duration");
    pub const STRING: N = n!("http://www.w3.org/2001/XMLSchema#string");
}

pub mod dct {
    use super::N;

    pub const LINGUISTIC_SYSTEM: N = n!("http://purl.org/dc/terms/LinguisticSystem");
    pub const LOCATION: N = n!("http://purl.org/dc/terms/Location");
    pub const PERIOD_OF_TIME: N = n!("http://purl.org/dc/terms/PeriodOfTime");

    pub const ACCESS_RIGHTS: N = n!("http://purl.org/dc/terms/accessRights");
    pub const ACCRUAL_PERIODICITY: N = n!("http://purl.org/dc/terms/accrualPeriodicity");
    pub const CONFORMS_TO: N = n!("http://purl.org/dc/terms/conformsTo");
    pub const CREATOR: N = n!("http://purl.org/dc/terms/creator");
    pub const DESCRIPTION: N = n!("http://purl.org/dc/terms/description");
    pub const FORMAT: N = n!("http://purl.org/dc/terms/format");
    pub const HAS_PART: N = n!("http://purl.org/dc/terms/hasPart");
    pub const IDENTIFIER: N = n!("http://purl.org/dc/terms/identifier");
    pub const IS_REFERENCED_BY: N = n!("http://purl.org/dc/terms/isReferencedBy");
    pub const ISSUED: N = n!("http://purl.org/dc/terms/issued");
    pub const LANGUAGE: N = n!("http://purl.org/dc/terms/language");
    pub const LICENSE: N = n!("http://purl.org/dc/terms/license");
    pub const MODIFIED: N = n!("http://purl.org/dc/terms/modified");
    pub const PUBLISHER: N = n!("http://purl.org/dc/terms/publisher");
    pub const RELATION: N = n!("http://purl.org/dc/terms/relation");
    pub const RIGHTS: N = n!("http://purl.org/dc/terms/rights");
    pub const SPATIAL: N = n!("http://purl.org/dc/terms/spatial");
    pub const TEMPORAL: N = n!("http://purl.org/dc/terms/temporal");
    pub const TITLE: N = n!("http://purl.org/dc/terms/title");
    pub const TYPE: N = n!("http://purl.org/dc/terms/type");
}

pub mod dcat {
    use super::N;

    pub const CATALOG_CLASS: N = n!("http://www.w3.org/ns/dcat#Catalog");
    pub const CATALOG_RECORD_CLASS: N = n!("http://www.w3.org/ns/dcat#CatalogRecord");
    pub const DATA_SERVICE_CLASS: N = n!("http://www.w3.org/ns/dcat#DataService");
    pub const DATASET_CLASS: N = n!("http://www.w3.org/ns/dcat#Dataset");
    pub const DATASET_SERIES_CLASS: N = n!("http://www.w3.org/ns/dcat#DatasetSeries");
    pub const DISTRIBUTION_CLASS: N = n!("http://www.w3.org/ns/dcat#Distribution");
    pub const RELATIONSHIP_CLASS: N = n!("http://www.w3.org/ns/dcat#Relationship");

    pub const ACCESS_SERVICE: N = n!("http://www.w3.org/ns/dcat#accessService");
    pub const ACCESS_URL: N = n!("http://www.w3.org/ns/dcat#accessURL");
    pub const BBOX: N = n!("http://www.w3.org/ns/dcat#bbox");
    pub const BYTE_SIZE: N = n!("http://www.w3.org/ns/dcat#byteSize");
    pub const CATALOG: N = n!("http://www.w3.org/ns/dcat#catalog");
    pub const CENTROID: N = n!("http://www.w3.org/ns/dcat#centroid");
    pub const COMPRESS_FORMAT: N = n!("http://www.w3.org/ns/dcat#compressFormat");
    pub const CONTACT_POINT: N = n!("http://www.w3.org/ns/dcat#contactPoint");
    pub const DATASET: N = n!("http://www.w3.org/ns/dcat#dataset");
    pub const DISTRIBUTION: N = n!("http://www.w3.org/ns/dcat#distribution");
    pub const DOWNLOAD_URL: N = n!("http://www.w3.org/ns/dcat#downloadURL");
    pub const END_DATE: N = n!("http://www.w3.org/ns/dcat#endDate");
    pub const ENDPOINT_DESCRIPTION: N = n!("http://www.w3.org/ns/dcat#endpointDescription");
    pub const ENDPOINT_URL: N = n!("http://www.w3.org/ns/dcat#endpointURL");
    pub const FIRST: N = n!("http://www.w3.org/ns/dcat#first");
    pub const HAD_ROLE: N = n!("http://www.w3.org/ns/dcat#hadRole");
    pub const IN_SERIES: N = n!("http://www.w3.org/ns/dcat#inSeries");
    pub const KEYWORD: N = n!("http://www.w3.org/ns/dcat#keyword");
    pub const LANDING_PAGE: N = n!("http://www.w3.org/ns/dcat#landingPage");
    pub const LAST: N = n!("http://www.w3.org/ns/dcat#last");
    pub const MEDIA_TYPE: N = n!("http://www.w3.org/ns/dcat#mediaType");
    pub const PACKAGE_FORMAT: N = n!("http://www.w3.org/ns/dcat#packageFormat");
    pub const PREV: N = n!("http://www.w3.org/ns/dcat#prev");
    pub const QUALIFIED_RELATION: N = n!("http://www.w3.org/ns/dcat#qualifiedRelation");
    pub const RECORD: N = n!("http://www.w3.org/ns/dcat#record");
    pub const SERVES_DATASET: N = n!("http://www.w3.org/ns/dcat#servesDataset");
    pub const SERVICE: N = n!("http://www.w3.org/ns/dcat#service");
    pub const SPATIAL_RESOLUTION_IN_METERS: N =
        n!("http://www.w3.org/ns/dcat#spatialResolutionInMeters");
    pub const START_DATE: N = n!("http://www.w3.org/ns/dcat#startDate");
    pub const TEMPORAL_RESOLUTION: N = n!("http://www.w3.org/ns/dcat#temporalResolution");
    pub const THEME: N = n!("http://www.w3.org/ns/dcat#theme");
    pub const THEME_TAXONOMY: N = n!("http://www.w3.org/ns/dcat#themeTaxonomy");
}

pub mod dcatno {
    use super::N;

    pub const ACCESS_RIGHTS_COMMENT: N =
        n!("https://data.norge.no/vocabulary/dcatno#accessRightsComment");
}

pub mod foaf {
    use super::N;

    pub const AGENT: N = n!("http://xmlns.com/foaf/0.1/Agent");
    pub const DOCUMENT: N = n!("http://xmlns.com/foaf/0.1/Document");

    pub const HOMEPAGE: N = n!("http://xmlns.com/foaf/0.1/homepage");
    pub const NAME: N = n!("http://xmlns.com/foaf/0.1/name");
    pub const PRIMARY_TOPIC: N = n!("http://xmlns.com/foaf/0.1/primaryTopic");
}

pub mod geosparql {
    use super::N;

    pub const AS_WKT: N = n!("http://www.opengis.net/ont/geosparql#asWKT");
}

pub mod locn {
    use super::N;

    pub const GEOMETRY: N = n!("http://www.w3.org/ns/locn#geometry");
}

pub mod odrl {
    use super::N;

    pub const HAS_POLICY: N = n!("http://www.w3.org/ns/odrl/2/hasPolicy");
}

pub mod owl {
    use super::N;

    pub const SAME_AS: N = n!("http://www.w3.org/2002/07/owl#sameAs");
}

pub mod prov {
    use super::N;

    pub const ATTRIBUTION: N = n!("http://www.w3.org/ns/prov#Attribution");

    pub const AGENT: N = n!("http://www.w3.org/ns/prov#agent");
    pub const QUALIFIED_ATTRIBUTION: N = n!("http://www.w3.org/ns/prov#qualifiedAttribution");
    pub const WAS_GENERATED_BY: N = n!("http://www.w3.org/ns/prov#wasGeneratedBy");
}

pub mod vcard {
    use super::N;

    pub const ORGANIZATION: N = n!("http://www.w3.org/2006/vcard/ns#Organization");

    pub const HAS_EMAIL: N = n!("http://www.w3.org/2006/vcard/ns#hasEmail");
    pub const HAS_ORGANIZATION_NAME: N = n!("http://www.w3.org/2006/vcard/ns#hasOrganizationName");
    pub const HAS_TELEPHONE: N = n!("http://www.w3.org/2006/vcard/ns#hasTelephone");
    pub const HAS_URL: N = n!("http://www.w3.org/2006/vcard/ns#hasURL");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        assert!(dcat::DATASET_CLASS.as_str().starts_with(ns::DCAT));
        assert!(dct::TITLE.as_str().starts_with(ns::DCT));
        assert!(vcard::HAS_EMAIL.as_str().starts_with(ns::VCARD));
        assert!(dcatno::ACCESS_RIGHTS_COMMENT.as_str().starts_with(ns::DCATNO));
        assert_eq!(rdf::TYPE, oxrdf::vocab::rdf::TYPE);
        assert_eq!(xsd::DATE, oxrdf::vocab::xsd::DATE);
    }
}
