//! Common test fixtures for NDFD forecast tests.
//!
//! Hand-written DWML documents shaped like real `NDFDgen` responses, trimmed
//! to the elements the extractor reads.

/// DWML documents.
pub mod dwml {
    /// Glance product for two points.
    ///
    /// Layouts:
    /// - `k-p24h-n2-1`: two 12-hour daytime ranges (maxt)
    /// - `k-p24h-n2-2`: two 13-hour overnight ranges (mint)
    /// - `k-p3h-n3-3`: three instantaneous 3-hourly times (sky, wx, icons)
    ///
    /// `point2`'s second maxt value is nil.
    pub const GLANCE_TWO_POINTS: &str = r#"<?xml version="1.0"?>
<dwml version="1.0" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="http://www.nws.noaa.gov/forecasts/xml/DWMLgen/schema/DWML.xsd">
  <head>
    <product srsName="WGS 1984" concise-name="glance" operational-mode="official">
      <title>NOAA's National Weather Service Forecast Data</title>
      <field>meteorological</field>
      <category>forecast</category>
      <creation-date refresh-frequency="PT1H">2008-06-02T15:12:43Z</creation-date>
    </product>
  </head>
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="38.99" longitude="-77.01"/>
    </location>
    <location>
      <location-key>point2</location-key>
      <point latitude="37.18" longitude="-101.35"/>
    </location>
    <moreWeatherInformation applicable-location="point1">http://forecast.weather.gov/MapClick.php?textField1=38.99&amp;textField2=-77.01</moreWeatherInformation>
    <moreWeatherInformation applicable-location="point2">http://forecast.weather.gov/MapClick.php?textField1=37.18&amp;textField2=-101.35</moreWeatherInformation>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p24h-n2-1</layout-key>
      <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-02T20:00:00-05:00</end-valid-time>
      <start-valid-time>2008-06-03T08:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-03T20:00:00-05:00</end-valid-time>
    </time-layout>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p24h-n2-2</layout-key>
      <start-valid-time>2008-06-02T20:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-03T09:00:00-05:00</end-valid-time>
      <start-valid-time>2008-06-03T20:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-04T09:00:00-05:00</end-valid-time>
    </time-layout>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p3h-n3-3</layout-key>
      <start-valid-time>2008-06-02T11:00:00-05:00</start-valid-time>
      <start-valid-time>2008-06-02T14:00:00-05:00</start-valid-time>
      <start-valid-time>2008-06-02T17:00:00-05:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <temperature type="maximum" units="Fahrenheit" time-layout="k-p24h-n2-1">
        <name>Daily Maximum Temperature</name>
        <value>85</value>
        <value>88</value>
      </temperature>
      <temperature type="minimum" units="Fahrenheit" time-layout="k-p24h-n2-2">
        <name>Daily Minimum Temperature</name>
        <value>65</value>
        <value>67</value>
      </temperature>
      <cloud-amount type="total" units="percent" time-layout="k-p3h-n3-3">
        <name>Cloud Cover Amount</name>
        <value>20</value>
        <value>35</value>
        <value>50</value>
      </cloud-amount>
      <weather time-layout="k-p3h-n3-3">
        <name>Weather Type, Coverage, and Intensity</name>
        <weather-conditions weather-summary="Sunny"/>
        <weather-conditions>
          <value coverage="chance" intensity="light" weather-type="rain showers" qualifier="none">
            <visibility xsi:nil="true"/>
          </value>
          <value coverage="chance" intensity="none" additive="and" weather-type="thunderstorms" qualifier="none">
            <visibility xsi:nil="true"/>
          </value>
        </weather-conditions>
        <weather-conditions/>
      </weather>
      <conditions-icon type="forecast-NWS" time-layout="k-p3h-n3-3">
        <name>Conditions Icons</name>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/skc.jpg</icon-link>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/hi_tsra30.jpg</icon-link>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/sct.jpg</icon-link>
      </conditions-icon>
    </parameters>
    <parameters applicable-location="point2">
      <temperature type="maximum" units="Fahrenheit" time-layout="k-p24h-n2-1">
        <name>Daily Maximum Temperature</name>
        <value>79</value>
        <value xsi:nil="true"/>
      </temperature>
      <temperature type="minimum" units="Fahrenheit" time-layout="k-p24h-n2-2">
        <name>Daily Minimum Temperature</name>
        <value>58</value>
        <value>60</value>
      </temperature>
      <cloud-amount type="total" units="percent" time-layout="k-p3h-n3-3">
        <name>Cloud Cover Amount</name>
        <value>10</value>
        <value>15</value>
        <value>25</value>
      </cloud-amount>
      <weather time-layout="k-p3h-n3-3">
        <name>Weather Type, Coverage, and Intensity</name>
        <weather-conditions weather-summary="Partly Cloudy"/>
        <weather-conditions>
          <value coverage="likely" intensity="moderate" weather-type="rain" qualifier="none">
            <visibility units="statute miles">10</visibility>
          </value>
          <value coverage="likely" intensity="light" weather-type="snow" qualifier="none">
            <visibility units="statute miles">3</visibility>
          </value>
        </weather-conditions>
        <weather-conditions weather-summary="Mostly Sunny"/>
      </weather>
      <conditions-icon type="forecast-NWS" time-layout="k-p3h-n3-3">
        <name>Conditions Icons</name>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/few.jpg</icon-link>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/ra_sn70.jpg</icon-link>
        <icon-link>http://www.nws.noaa.gov/weather/images/fcicons/few.jpg</icon-link>
      </conditions-icon>
    </parameters>
  </data>
</dwml>
"#;

    /// RTMA analysis for one point: temperature with uncertainty plus a
    /// generic precipitation amount, on two hourly instants.
    pub const RTMA_POINT: &str = r#"<?xml version="1.0"?>
<dwml version="1.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="35.20" longitude="-97.44"/>
    </location>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p1h-n2-1</layout-key>
      <start-valid-time>2008-06-02T10:00:00-05:00</start-valid-time>
      <start-valid-time>2008-06-02T11:00:00-05:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <temperature type="rtma" units="Fahrenheit" time-layout="k-p1h-n2-1">
        <name>RTMA Temperature</name>
        <valueWithUncertainty>
          <value>72</value>
          <uncertainty type="rtma">
            <error>2.5</error>
          </uncertainty>
        </valueWithUncertainty>
        <valueWithUncertainty>
          <value>74</value>
          <uncertainty type="rtma">
            <error>2.40</error>
          </uncertainty>
        </valueWithUncertainty>
      </temperature>
      <precipitation type="rtma" units="inches" time-layout="k-p1h-n2-1">
        <name>RTMA Liquid Precipitation Amount</name>
        <value>0.00</value>
        <value>0.12</value>
      </precipitation>
    </parameters>
  </data>
</dwml>
"#;

    /// Marine point whose wave-height values sit one level below the element
    /// that carries the time-layout.
    pub const WAVE_HEIGHT_POINT: &str = r#"<?xml version="1.0"?>
<dwml version="1.0">
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="36.85" longitude="-75.90"/>
    </location>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p6h-n2-1</layout-key>
      <start-valid-time>2008-06-02T08:00:00-04:00</start-valid-time>
      <start-valid-time>2008-06-02T14:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <water-state time-layout="k-p6h-n2-1">
        <waves type="significant" units="feet">
          <name>Wave Height</name>
          <value>3</value>
          <value>4</value>
        </waves>
      </water-state>
    </parameters>
  </data>
</dwml>
"#;

    /// maxt carries three values against a two-slot layout.
    pub const MISMATCHED_LAYOUT: &str = r#"<?xml version="1.0"?>
<dwml version="1.0">
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="38.99" longitude="-77.01"/>
    </location>
    <time-layout time-coordinate="local" summarization="none">
      <layout-key>k-p24h-n2-1</layout-key>
      <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-02T20:00:00-05:00</end-valid-time>
      <start-valid-time>2008-06-03T08:00:00-05:00</start-valid-time>
      <end-valid-time>2008-06-03T20:00:00-05:00</end-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <temperature type="maximum" units="Fahrenheit" time-layout="k-p24h-n2-1">
        <name>Daily Maximum Temperature</name>
        <value>85</value>
        <value>88</value>
        <value>90</value>
      </temperature>
    </parameters>
  </data>
</dwml>
"#;

    /// A "more information" link that names a location the document never
    /// defines.
    pub const UNKNOWN_LINK_LOCATION: &str = r#"<?xml version="1.0"?>
<dwml version="1.0">
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="38.99" longitude="-77.01"/>
    </location>
    <moreWeatherInformation applicable-location="point9">http://forecast.weather.gov/MapClick.php</moreWeatherInformation>
  </data>
</dwml>
"#;

    /// Document cut off mid-element.
    pub const TRUNCATED: &str = r#"<?xml version="1.0"?>
<dwml version="1.0">
  <data>
    <location>
      <location-key>point1</location-key>
      <point latitude="38.99" longitude="-77.01"/>
"#;

    /// Response shape of the lat/lon list services.
    pub const LAT_LON_LIST: &str = r#"<?xml version="1.0"?>
<dwml version="1.0">
  <latLonList>38.88,-77.10 37.1764,-101.347</latLonList>
</dwml>
"#;
}

/// NWS zone full-text products.
pub mod zone {
    /// Zone forecast for Cheyenne County, KS (`ks/ksz001.txt`).
    pub const KSZ001: &str = "Expires:200806030900;;059089
FPUS53 KGLD 021515
ZFPGLD

ZONE FORECAST PRODUCT
1015 AM CDT MON JUN 2 2008

KSZ001-030900-
CHEYENNE-
INCLUDING THE CITY OF...ST. FRANCIS
1015 AM CDT MON JUN 2 2008

.TODAY...SUNNY. HIGHS AROUND 90.
.TONIGHT...CLEAR. LOWS IN THE MID 60S.
$$
";
}

/// Lat/lon list strings.
pub mod latlon {
    /// Two points in NDFD list format.
    pub const TWO_POINTS: &str = "38.88,-77.10 37.1764,-101.347";
}
